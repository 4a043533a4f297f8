#![deny(missing_docs)]

//! # prov-core — Foundational Types for the Provenance Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`ProductId`] where an [`OrgId`] is
//!    expected.
//!
//! 2. **[`CustodyError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! 3. **Policy as data.** The allowed custody hand-offs are a
//!    [`TransferGraph`] value checked by set membership, not a ladder of
//!    hard-coded conditionals. Adding a role is a configuration change.

pub mod error;
pub mod graph;
pub mod identity;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{CustodyError, StoreError, ValidationError};
pub use graph::{TransferGraph, DISTRIBUTOR, MANUFACTURER, RETAILER};
pub use identity::{OrgId, ProductId};
pub use temporal::Timestamp;
