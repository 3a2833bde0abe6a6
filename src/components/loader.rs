//! Page Loader Component
//!
//! Full-page overlay shown while the page settles, hidden after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const LOADER_HIDE_MS: u32 = 3000;

/// Load overlay; keeps the `hidden` class off for the first few seconds
#[component]
pub fn Loader() -> impl IntoView {
    let (hidden, set_hidden) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(LOADER_HIDE_MS).await;
            set_hidden.set(true);
        });
    });

    view! {
        <div class=move || if hidden.get() { "loader-wrapper hidden" } else { "loader-wrapper" }>
            <div class="loader"></div>
        </div>
    }
}
