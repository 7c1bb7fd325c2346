//! Catalog panel: the product grid with add-to-cart.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::types::CatalogItem;
use crate::state::panel::PanelState;
use crate::state::router::{RouterState, View};
use crate::state::ui::UiState;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let panel = RwSignal::new(PanelState::<Vec<CatalogItem>>::Loading);

    Effect::new(move || {
        let state = router.get();
        if state.active != View::Catalog {
            return;
        }
        let token = state.generation;
        panel.set(PanelState::Loading);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_catalog().await;
                if !router.get_untracked().accepts(View::Catalog, token) {
                    return;
                }
                if let Err(err) = &result {
                    log::warn!("catalog load failed: {err}");
                }
                panel.set(PanelState::from_result(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let on_add = Callback::new(move |product_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::add_to_cart(product_id).await {
                    Ok(()) => {
                        crate::app::refresh_cart_badge(ui).await;
                        crate::app::notify(ui, "Product added to cart!");
                    }
                    Err(crate::net::api::ApiError::Status(401)) => {
                        crate::app::notify(ui, "Log in to add products to your cart.");
                    }
                    Err(err) => {
                        crate::app::notify(ui, &format!("Add to cart failed: {err}"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, ui);
        }
    });

    view! {
        <h1>"Catalog"</h1>
        {move || match panel.get() {
            PanelState::Loading => view! { <p>"Loading..."</p> }.into_any(),
            PanelState::Failed(err) => {
                view! { <p class="error">{format!("Failed to load catalog: {err}")}</p> }
                    .into_any()
            }
            PanelState::Ready(items) => {
                view! {
                    <div class="catalog-grid">
                        {items
                            .into_iter()
                            .map(|item| view! { <ProductCard item=item on_add=on_add/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
