//! Cart panel: server-fetched lines, removal, and checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server cart is authoritative; every mutation round-trips and then
//! re-fetches, so the panel never renders a cart it did not just fetch.
//! The "+" button re-adds the product (the backend increments the existing
//! line); there is no decrement endpoint.

use leptos::prelude::*;

use crate::net::types::{CartLine, OrderConfirmation};
use crate::state::cart;
use crate::state::panel::PanelState;
use crate::state::router::{RouterState, View};
use crate::state::ui::UiState;
use crate::util::format;

#[cfg(feature = "hydrate")]
async fn reload_cart(
    router: RwSignal<RouterState>,
    ui: RwSignal<UiState>,
    panel: RwSignal<PanelState<Vec<CartLine>>>,
) {
    let token = router.get_untracked().generation;
    let result = crate::net::api::fetch_cart().await;
    if let Ok(lines) = &result {
        ui.update(|u| u.cart_count = cart::item_count(lines));
    }
    if router.get_untracked().accepts(View::Cart, token) {
        panel.set(PanelState::from_result(result));
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let panel = RwSignal::new(PanelState::<Vec<CartLine>>::Loading);
    let confirmation = RwSignal::new(None::<OrderConfirmation>);

    Effect::new(move || {
        let state = router.get();
        if state.active != View::Cart {
            return;
        }
        panel.set(PanelState::Loading);
        confirmation.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                reload_cart(router, ui, panel).await;
            });
        }
    });

    let on_add_one = Callback::new(move |product_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::add_to_cart(product_id).await {
                    Ok(()) => reload_cart(router, ui, panel).await,
                    Err(err) => crate::app::notify(ui, &format!("Update failed: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, ui);
        }
    });

    let on_remove = Callback::new(move |cart_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::remove_from_cart(cart_id).await {
                    Ok(()) => {
                        crate::app::notify(ui, "Product removed from cart");
                        reload_cart(router, ui, panel).await;
                    }
                    Err(err) => crate::app::notify(ui, &format!("Remove failed: {err}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = cart_id;
        }
    });

    let on_checkout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::checkout().await {
                    Ok(placed) => {
                        confirmation.set(Some(placed));
                        crate::app::notify(ui, "Order placed! Check your profile.");
                        reload_cart(router, ui, panel).await;
                    }
                    Err(crate::net::api::ApiError::Status(400)) => {
                        crate::app::notify(ui, "Cart is empty!");
                    }
                    Err(err) => crate::app::notify(ui, &format!("Checkout failed: {err}")),
                }
            });
        }
    };

    view! {
        <h1>"Cart"</h1>
        {move || {
            confirmation
                .get()
                .map(|placed| {
                    view! {
                        <p class="order-confirmation">
                            {format!(
                                "Order #{} placed, total {}. {}",
                                placed.order_id,
                                format::price(u64::from(placed.total_cents)),
                                placed.message,
                            )}
                        </p>
                    }
                })
        }}
        {move || match panel.get() {
            PanelState::Loading => view! { <p>"Loading..."</p> }.into_any(),
            PanelState::Failed(err) => {
                view! { <p class="error">{format!("Failed to load cart: {err}")}</p> }.into_any()
            }
            PanelState::Ready(lines) if lines.is_empty() => {
                view! { <p>"Your cart is empty"</p> }.into_any()
            }
            PanelState::Ready(lines) => {
                let total = cart::total_cents(&lines);
                view! {
                    <div class="cart-items">
                        {lines
                            .into_iter()
                            .map(|line| view! { <CartRow line=line on_add_one=on_add_one on_remove=on_remove/> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="cart-summary">
                        <div class="total">{format!("Total: {}", format::price(total))}</div>
                        <button class="checkout-btn" on:click=on_checkout>
                            "Checkout"
                        </button>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// One fetched cart line with its quantity and removal controls.
#[component]
fn CartRow(line: CartLine, on_add_one: Callback<i64>, on_remove: Callback<i64>) -> impl IntoView {
    let product_id = line.product_id;
    let cart_id = line.id;

    view! {
        <div class="cart-item">
            <img src=line.image_url.clone() alt=line.name.clone()/>
            <div class="cart-item-info">
                <h3>{line.name.clone()}</h3>
                <div class="price">{format::price(u64::from(line.price_cents))}</div>
            </div>
            <div class="cart-item-quantity">
                <span>{format!("x{}", line.quantity)}</span>
                <button class="quantity-btn increase" on:click=move |_| on_add_one.run(product_id)>
                    "+"
                </button>
            </div>
            <button class="remove-btn" on:click=move |_| on_remove.run(cart_id)>
                "Remove"
            </button>
        </div>
    }
}
