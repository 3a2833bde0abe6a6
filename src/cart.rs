//! Cart Store
//!
//! Persisted shopping cart: an ordered list of line items under `cartItems`
//! plus a redundant `cartCount` (sum of quantities) for fast badge display.
//! Every mutation rewrites both keys in full.

use crate::models::CartItem;
use crate::storage::{BrowserStorage, KeyValueStore};

/// localStorage key holding the JSON-serialized item array
pub const ITEMS_KEY: &str = "cartItems";
/// localStorage key holding the stringified total quantity
pub const COUNT_KEY: &str = "cartCount";

/// Cart operations over an injected key-value backend.
pub struct CartStore<S: KeyValueStore> {
    storage: S,
}

impl CartStore<BrowserStorage> {
    /// Store over the page's localStorage.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted items. Missing or malformed data reads as an
    /// empty cart; corruption is warned about but never surfaced.
    pub fn load(&self) -> Vec<CartItem> {
        let Some(raw) = self.storage.get(ITEMS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn(&format!("discarding unreadable cart data: {err}"));
                Vec::new()
            }
        }
    }

    /// Write the full item list and refresh the persisted count.
    pub fn save(&self, items: &[CartItem]) {
        if let Ok(json) = serde_json::to_string(items) {
            self.storage.set(ITEMS_KEY, &json);
        }
        let total: u32 = items.iter().map(|item| item.qty).sum();
        self.storage.set(COUNT_KEY, &total.to_string());
    }

    /// Add a candidate item. A line item with the same name already in the
    /// cart absorbs it as one more unit (the first add's id and price win);
    /// otherwise the candidate is appended as-is.
    pub fn add(&self, candidate: CartItem) {
        let mut items = self.load();
        if let Some(existing) = items.iter_mut().find(|item| item.name == candidate.name) {
            existing.qty += 1;
        } else {
            items.push(candidate);
        }
        self.save(&items);
    }

    /// Drop the item with the given id. Unknown ids leave the cart
    /// unchanged (the equivalent state is still written back).
    pub fn remove(&self, id: &str) {
        let mut items = self.load();
        items.retain(|item| item.id != id);
        self.save(&items);
    }

    /// Empty the cart: the item list key is removed outright, the count
    /// is reset to zero.
    pub fn clear(&self) {
        self.storage.remove(ITEMS_KEY);
        self.storage.set(COUNT_KEY, "0");
    }

    /// Persisted total quantity, for the nav badge. Missing or
    /// non-numeric values read as zero.
    pub fn count(&self) -> u32 {
        self.storage
            .get(COUNT_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }
}

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
