//! Navigation Bar Component
//!
//! Brand, section links with smooth scroll, hamburger toggle for small
//! screens, and the cart icon with its live count badge.

use leptos::prelude::*;

use crate::cart::CartStore;
use crate::components::scroll_to_fragment;
use crate::context::AppContext;

/// Section links shown in the nav
const NAV_LINKS: &[(&str, &str)] = &[
    ("#burgers", "Burgers"),
    ("#pizza", "Pizza"),
    ("#tacos", "Tacos"),
    ("#desserts", "Desserts"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (menu_open, set_menu_open) = signal(false);

    // Badge re-reads persisted count whenever the cart version bumps
    let cart_count = move || {
        ctx.cart_version.get();
        CartStore::browser().count()
    };

    let open_cart = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.open_cart();
    };

    view! {
        <nav class="site-nav">
            <a href="#home" class="brand" on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                scroll_to_fragment("#home");
            }>
                "Cluster 1"
            </a>

            <button
                class=move || if menu_open.get() { "nav-toggle open" } else { "nav-toggle" }
                aria-label="Toggle navigation"
                aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <span class="bar"></span>
                <span class="bar"></span>
                <span class="bar"></span>
            </button>

            <ul class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                {NAV_LINKS.iter().map(|(href, label)| {
                    let href = *href;
                    view! {
                        <li>
                            <a href=href on:click=move |ev: web_sys::MouseEvent| {
                                // scroll links handled here; bare "#" would fall through
                                if href.len() > 1 {
                                    ev.prevent_default();
                                    scroll_to_fragment(href);
                                }
                                // close the menu on navigation (mobile)
                                set_menu_open.set(false);
                            }>
                                {*label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <a href="#" class="cart-icon" aria-label="Open cart" on:click=open_cart>
                "🛒"
                <span id="cart-count" class="cart-count">{cart_count}</span>
            </a>
        </nav>
    }
}
