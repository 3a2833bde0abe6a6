//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays visible
const TOAST_HIDE_MS: u32 = 3000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every cart mutation; cart views track this to re-read storage
    pub cart_version: ReadSignal<u32>,
    set_cart_version: WriteSignal<u32>,
    /// Whether the cart modal is open
    pub cart_open: ReadSignal<bool>,
    set_cart_open: WriteSignal<bool>,
    /// Current toast text
    pub toast_message: ReadSignal<String>,
    set_toast_message: WriteSignal<String>,
    /// Whether the toast is showing
    pub toast_visible: ReadSignal<bool>,
    set_toast_visible: WriteSignal<bool>,
    /// Pending hide timer; replaced (and thereby cancelled) on every notify
    toast_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        let (cart_version, set_cart_version) = signal(0u32);
        let (cart_open, set_cart_open) = signal(false);
        let (toast_message, set_toast_message) = signal(String::new());
        let (toast_visible, set_toast_visible) = signal(false);

        Self {
            cart_version,
            set_cart_version,
            cart_open,
            set_cart_open,
            toast_message,
            set_toast_message,
            toast_visible,
            set_toast_visible,
            toast_timer: StoredValue::new_local(None),
        }
    }

    /// Signal that persisted cart state changed
    pub fn bump_cart(&self) {
        self.set_cart_version.update(|v| *v += 1);
    }

    pub fn open_cart(&self) {
        self.set_cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.set_cart_open.set(false);
    }

    /// Show a transient toast. The latest message wins: the previous hide
    /// timer is dropped (cancelling it) and a fresh one governs hide time.
    pub fn notify(&self, message: impl Into<String>) {
        self.set_toast_message.set(message.into());
        self.set_toast_visible.set(true);

        let set_toast_visible = self.set_toast_visible;
        let timer = Timeout::new(TOAST_HIDE_MS, move || set_toast_visible.set(false));
        self.toast_timer.update_value(|slot| *slot = Some(timer));
    }
}
