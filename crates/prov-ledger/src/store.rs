//! # Ledger Store Contract
//!
//! The versioned key-value store the custody core is written against. The
//! hosting platform supplies the transaction context: every method is
//! scoped to the current invocation, and the platform's concurrency control
//! guarantees that two conflicting read-modify-write sequences on the same
//! key do not both commit silently. The core therefore holds no locks and
//! never retries.

use serde::{Deserialize, Serialize};

use prov_core::StoreError;

/// Opaque identifier of one committed write to a key, as assigned by the
/// store (a transaction ID on ledger-backed deployments).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId(String);

impl VersionId {
    /// Wrap a store-assigned version token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rich-query predicate: equality on one top-level field of the stored
/// JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSelector {
    /// The top-level field to match.
    pub field: String,
    /// The required string value of that field.
    pub value: String,
}

impl IndexSelector {
    /// Build a selector matching `field == value`.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A lazy sequence of `(key, value)` pairs produced by a scan or indexed
/// query. Finite, not restartable mid-stream; an `Err` item aborts the
/// consuming query.
pub type ScanIter<'a> = Box<dyn Iterator<Item = Result<(String, Vec<u8>), StoreError>> + 'a>;

/// The versioned key-value store contract.
pub trait LedgerStore {
    /// Read the current value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, recording a new committed version.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Lazily iterate `(key, value)` pairs with `start <= key < end` in
    /// lexicographic key order. An empty bound means unbounded on that
    /// side; a reversed range (`start > end`) selects nothing.
    fn range_scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>, StoreError>;

    /// Lazily iterate `(key, value)` pairs whose stored value satisfies the
    /// selector, using the store's secondary-index capability.
    fn index_query(&self, selector: &IndexSelector) -> Result<ScanIter<'_>, StoreError>;

    /// Every committed write to `key` in commit order, oldest first. This
    /// includes writes that produced a value identical to its predecessor.
    fn key_version_history(&self, key: &str) -> Result<Vec<(VersionId, Vec<u8>)>, StoreError>;
}
