//! Newsletter Form Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::alert;

/// Email capture stub; acknowledges and resets only when something was typed
#[component]
pub fn NewsletterForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() {
            return;
        }
        alert("Subscribed! Thank you for joining our newsletter.");
        set_email.set(String::new());
    };

    view! {
        <form id="newsletter-form" class="newsletter-form" on:submit=submit>
            <input
                type="email"
                placeholder="Enter your email"
                prop:value=move || email.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_email.set(input.value());
                }
            />
            <button type="submit">"Subscribe"</button>
        </form>
    }
}
