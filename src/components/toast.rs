//! Toast Notification Component
//!
//! Visibility and hide timing live in `AppContext::notify`; this only
//! mirrors the toast signals into the DOM.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div
            id="toast-notification"
            class=move || if ctx.toast_visible.get() { "toast show" } else { "toast" }
            role="status"
        >
            {move || ctx.toast_message.get()}
        </div>
    }
}
