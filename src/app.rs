//! Storefront App
//!
//! Top-level component: landing page layout plus the cart/toast overlays.

use leptos::prelude::*;

use crate::catalog::CATEGORIES;
use crate::components::{
    scroll_to_fragment, CartModal, ContactForm, Loader, MenuSection, NavBar, NewsletterForm, Toast,
};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <Loader />
        <NavBar />

        <header id="home" class="hero">
            <h1>"Cluster 1"</h1>
            <p class="tagline">"Burgers, pizza, tacos and desserts, made to order."</p>
            <button class="cta" on:click=move |_| scroll_to_fragment("#burgers")>
                "Browse the Menu"
            </button>
        </header>

        <main>
            {CATEGORIES.iter().map(|category| {
                view! { <MenuSection category=*category /> }
            }).collect_view()}

            <section id="contact" class="page-section">
                <h2>"Contact Us"</h2>
                <ContactForm />
            </section>

            <section id="newsletter" class="page-section">
                <h2>"Stay in the Loop"</h2>
                <NewsletterForm />
            </section>
        </main>

        <footer class="site-footer">
            <p>"© 2025 Cluster 1. All rights reserved."</p>
        </footer>

        <CartModal />
        <Toast />
    }
}
