//! Product Card Component
//!
//! One menu item: image, name, price text, and the add-to-cart button
//! with its transient "Added!" feedback.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart::CartStore;
use crate::context::AppContext;
use crate::models::{CartItem, Product};
use crate::render::parse_price;

/// How long the button shows "Added!" before restoring its label
const ADDED_RESET_MS: u32 = 1200;

/// Millisecond-timestamp id, matching the format of previously persisted carts
fn fresh_item_id() -> String {
    (js_sys::Date::now() as u64).to_string()
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (added, set_added) = signal(false);

    let add_to_cart = move |_| {
        let price = parse_price(product.price_text);
        CartStore::browser().add(CartItem::new(fresh_item_id(), product.name, price));
        ctx.bump_cart();
        ctx.notify(format!("{} has been added to your cart!", product.name));

        set_added.set(true);
        spawn_local(async move {
            TimeoutFuture::new(ADDED_RESET_MS).await;
            set_added.set(false);
        });
    };

    view! {
        <div class="product-card">
            <img class="product-image" src=product.image alt=product.name />
            <div class="name">{product.name}</div>
            <div class="price">{product.price_text}</div>
            <button
                class=move || if added.get() { "add-to-cart added" } else { "add-to-cart" }
                disabled=move || added.get()
                on:click=add_to_cart
            >
                {move || if added.get() { "Added!" } else { "Add to Cart" }}
            </button>
        </div>
    }
}
