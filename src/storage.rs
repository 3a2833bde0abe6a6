//! Persistence Adapter
//!
//! Key-value string storage behind a trait so the cart store can run
//! against an in-memory fake in tests and localStorage in the browser.

/// Whole-value string storage. All operations fail soft: a missing key or
/// an unavailable backend reads as `None`, writes are best-effort.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser localStorage. Access is re-resolved per call; if the window or
/// storage is unavailable (e.g. storage access denied), every operation
/// degrades to a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn backend() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backend()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backend() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backend() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
pub mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed a raw value, bypassing the cart store (for corrupt-data tests).
        pub fn seed(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }
}
