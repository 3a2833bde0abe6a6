//! Cart Modal Component
//!
//! Overlay listing the cart contents with subtotal, clear and close.
//! Rows are generated markup (see `render::cart_rows_html`), so remove
//! clicks are caught by delegation on the item container.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::cart::CartStore;
use crate::context::AppContext;
use crate::render;

#[component]
pub fn CartModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let rows = move || {
        ctx.cart_version.get();
        render::cart_rows_html(&CartStore::browser().load())
    };

    let subtotal_text = move || {
        ctx.cart_version.get();
        render::format_currency(render::subtotal(&CartStore::browser().load()))
    };

    let on_items_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target() else { return };
        let Ok(element) = target.dyn_into::<web_sys::Element>() else { return };
        let Ok(Some(button)) = element.closest(".btn-remove") else { return };
        if let Some(id) = button.get_attribute("data-id") {
            CartStore::browser().remove(&id);
            ctx.bump_cart();
        }
    };

    let clear_cart = move |_| {
        CartStore::browser().clear();
        ctx.close_cart();
        ctx.bump_cart();
    };

    view! {
        <div
            id="cart-modal"
            class=move || if ctx.cart_open.get() { "cart-modal" } else { "cart-modal hidden" }
            aria-hidden=move || if ctx.cart_open.get() { "false" } else { "true" }
        >
            <div class="cart-panel">
                <div class="cart-header">
                    <h2>"Your Cart"</h2>
                    <button id="cart-close" aria-label="Close cart" on:click=move |_| ctx.close_cart()>
                        "×"
                    </button>
                </div>

                <div id="cart-items" on:click=on_items_click inner_html=rows></div>

                <div class="cart-footer">
                    <div class="cart-subtotal-row">
                        "Subtotal: "
                        <span id="cart-subtotal">{subtotal_text}</span>
                    </div>
                    <button id="clear-cart" class="btn-muted" on:click=clear_cart>
                        "Clear Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
