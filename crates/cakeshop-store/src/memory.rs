//! In-memory session store
//!
//! The test and preview backend: a HashMap behind a mutex. Also the
//! reference implementation of the ordering guarantee, since every
//! operation completes before it returns.

use crate::store::SessionStore;
use cakeshop_core::Result;
use parking_lot::Mutex;
use std::collections::HashMap;

/// HashMap-backed [`SessionStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys, for test assertions
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}
