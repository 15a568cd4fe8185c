//! # Cakeshop Store
//!
//! The session persistence port for Cakeshop. Everything the storefront
//! remembers between page loads goes through one key-value contract:
//! get/set/remove over JSON blobs, one well-known key per concern.
//!
//! Two implementations are provided:
//! - [`MemoryStore`]: HashMap-backed, used by tests and previews
//! - [`FileStore`]: one JSON file per key under a data directory
//!
//! Malformed persisted JSON is never an error on the read path: it is
//! logged at `warn` and treated as absent, so a corrupt blob degrades to
//! the empty default instead of failing the caller.

pub mod file;
pub mod keys;
pub mod memory;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{SessionStore, SharedStore, StoreExt};
