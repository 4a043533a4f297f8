//! # Error Hierarchy
//!
//! Structured error types for the entire Provenance Stack, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every precondition failure in the transition engine is a definitional
//! business-rule violation, not a transient fault: nothing here is retried
//! internally, and nothing is swallowed. Each variant carries the context an
//! operator needs to diagnose the rejection without guesswork.

use thiserror::Error;

use crate::identity::{OrgId, ProductId};

/// Top-level error type for custody operations.
#[derive(Error, Debug)]
pub enum CustodyError {
    /// The caller's identity does not satisfy the operation's role or
    /// ownership requirement.
    #[error("caller {caller} is not authorized to {action}")]
    Unauthorized {
        /// The identity token of the rejected caller.
        caller: OrgId,
        /// The action that was refused (e.g., "create products").
        action: String,
    },

    /// The referenced product does not exist on the ledger.
    #[error("product {0} does not exist")]
    NotFound(ProductId),

    /// A create was attempted for a key that is already present.
    #[error("product {0} already exists")]
    AlreadyExists(ProductId),

    /// The requested hand-off is not an edge of the transfer graph.
    #[error("invalid transfer path from {from} to {to}")]
    InvalidTransition {
        /// The organization attempting to hand off custody.
        from: OrgId,
        /// The organization that was to take custody.
        to: OrgId,
    },

    /// A collaborator failed: ledger backend, stored-value codec, or
    /// identity resolver.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Failures surfaced by the Ledger Store and Identity Resolver
/// collaborators.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The ledger backend rejected or failed a read/write.
    #[error("ledger backend failure: {0}")]
    Backend(String),

    /// A stored value could not be decoded. Data corruption is not locally
    /// recoverable; the operation in progress is aborted.
    #[error("stored value could not be decoded: {0}")]
    Codec(#[from] serde_json::Error),

    /// The caller's identity token could not be resolved.
    #[error("caller identity unavailable: {0}")]
    Identity(String),
}

/// Validation errors for domain primitive newtypes.
///
/// Each identifier type enforces format constraints at construction time.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Organization token is empty or contains whitespace.
    #[error("invalid organization ID: \"{0}\" (expected non-empty token without whitespace)")]
    InvalidOrgId(String),

    /// Product identifier is empty or contains whitespace.
    #[error("invalid product ID: \"{0}\" (expected non-empty token without whitespace)")]
    InvalidProductId(String),
}
