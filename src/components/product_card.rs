//! Product card for the catalog grid.

use leptos::prelude::*;

use crate::net::types::CatalogItem;
use crate::util::format;

/// One catalog product with its add-to-cart affordance.
#[component]
pub fn ProductCard(item: CatalogItem, on_add: Callback<i64>) -> impl IntoView {
    let product_id = item.id;

    view! {
        <article class="product-card">
            <img src=item.image_url.clone() alt=item.name.clone()/>
            <h2>{item.name.clone()}</h2>
            <p class="desc">{item.description.clone()}</p>
            <div class="price">{format::price(u64::from(item.price_cents))}</div>
            <button class="add-to-cart-btn" on:click=move |_| on_add.run(product_id)>
                "Add to Cart"
            </button>
        </article>
    }
}
