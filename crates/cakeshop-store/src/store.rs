//! The session store contract
//!
//! A minimal key-value port over raw JSON strings, plus typed serde
//! helpers layered on top. Business code depends on `SharedStore` and
//! the typed helpers only; which backend sits underneath is an
//! injection-time decision.

use cakeshop_core::{Result, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Key-value persistence over raw JSON strings
///
/// Implementations must make writes visible to subsequent reads in call
/// order (write-through). There is no expiry and no cross-process
/// locking; a single logical writer is assumed.
pub trait SessionStore: Send + Sync {
    /// Returns the raw blob stored under `key`, if any
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous blob
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the blob stored under `key`; absent keys are a no-op
    fn remove(&self, key: &str);
}

/// A store handle shared between the session, ledger, and checkout state
pub type SharedStore = Arc<dyn SessionStore>;

/// Typed accessors over any [`SessionStore`]
pub trait StoreExt {
    /// Reads and deserializes the value under `key`
    ///
    /// Absent keys and unparseable blobs both yield `None`; a parse
    /// failure is logged and the blob is treated as if it were never
    /// written.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T>;

    /// Serializes `value` and writes it through under `key`
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;
}

impl<S: SessionStore + ?Sized> StoreExt for S {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "discarding malformed persisted blob");
                None
            }
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(StorageError::Json)?;
        self.set_raw(key, &raw)
    }
}
