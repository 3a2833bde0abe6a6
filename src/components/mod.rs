//! UI Components
//!
//! Leptos components for the landing page.

mod cart_modal;
mod contact_form;
mod loader;
mod menu_section;
mod nav_bar;
mod newsletter_form;
mod product_card;
mod toast;

pub use cart_modal::CartModal;
pub use contact_form::ContactForm;
pub use loader::Loader;
pub use menu_section::MenuSection;
pub use nav_bar::NavBar;
pub use newsletter_form::NewsletterForm;
pub use product_card::ProductCard;
pub use toast::Toast;

/// Browser alert, used by the fake form submits.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Smooth-scroll to an in-page fragment target like `"#burgers"`.
/// Unknown fragments scroll nowhere.
pub(crate) fn scroll_to_fragment(fragment: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(Some(target)) = document.query_selector(fragment) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
