//! Contact Form Component
//!
//! No backend behind it: submit acknowledges with an alert and resets.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::alert;

#[component]
pub fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        alert("Thank you for contacting us! We will get back to you soon.");
        set_name.set(String::new());
        set_email.set(String::new());
        set_message.set(String::new());
    };

    view! {
        <form class="contact-form" on:submit=submit>
            <input
                type="text"
                placeholder="Your name"
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <input
                type="email"
                placeholder="Your email"
                prop:value=move || email.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_email.set(input.value());
                }
            />
            <textarea
                placeholder="Your message"
                prop:value=move || message.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_message.set(area.value());
                }
            ></textarea>
            <button type="submit">"Send Message"</button>
        </form>
    }
}
