//! Error handling for Cakeshop
//!
//! Provides error types for all layers of the application:
//! - Storage errors (session store read/write)
//! - Builder errors (configuration session and edit flow)
//! - Checkout errors (aggregation preconditions)
//!
//! All error types use `thiserror` for ergonomic error handling. None of
//! these conditions is fatal: storage failures fall back to defaults,
//! builder failures resolve to a reset, and checkout failures gate
//! navigation.

use thiserror::Error;

/// Session store error type
///
/// Represents failures of the key-value persistence layer. Malformed
/// persisted JSON is deliberately *not* an error at the read API (it is
/// discarded and logged); these variants cover genuine I/O and
/// serialization failures on the write path.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store could not be written
    #[error("Failed to write store key '{key}': {reason}")]
    WriteFailed {
        /// The store key being written.
        key: String,
        /// A message describing the failure.
        reason: String,
    },

    /// The store directory could not be found or created
    #[error("Store directory error: {0}")]
    Directory(String),

    /// I/O error during store operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration session / builder error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// An edit marker referenced a cart item that no longer exists
    #[error("Cart item '{0}' not found")]
    ItemNotFound(String),

    /// A later wizard step was entered without the data of an earlier one
    #[error("Step '{step}' requires data from an earlier step: {missing}")]
    IncompleteState {
        /// The step that was entered.
        step: String,
        /// What is missing.
        missing: String,
    },

    /// The layer stack violates the cake structure rules
    #[error("Invalid cake structure: {}", messages.join(" "))]
    InvalidStructure {
        /// Human-readable rule violations, in display order.
        messages: Vec<String>,
    },

    /// The appearance step was committed without any decoration
    #[error("Add at least one decoration (text or image) to your cake")]
    NoDecorations,

    /// An uploaded image exceeds the embedded-data size cap
    #[error("Image data is {size} bytes, exceeding the {max} byte limit")]
    OversizedImage {
        /// Size of the rejected upload in bytes.
        size: usize,
        /// The configured maximum in bytes.
        max: usize,
    },
}

/// Checkout aggregation error type
///
/// `calculate_total` itself is pure and unchecked; these variants are
/// produced by the summary-step gate that callers run first.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart ledger has no items
    #[error("Cart is empty")]
    EmptyCart,

    /// Customer details have not been captured yet
    #[error("Customer details are missing")]
    MissingCustomerDetails,

    /// Delivery details have not been captured yet
    #[error("Delivery details are missing")]
    MissingDeliveryDetails,
}

/// Top-level error type aggregating all layers
#[derive(Error, Debug)]
pub enum Error {
    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Builder error
    #[error(transparent)]
    Builder(#[from] BuilderError),

    /// Checkout error
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the Cakeshop error type
pub type Result<T> = std::result::Result<T, Error>;
