#![deny(missing_docs)]

//! # prov-engine — The Custody Core
//!
//! Tracks custody of discrete physical goods as they move between
//! organizations, recording an append-only history of state transitions
//! over a versioned key-value store.
//!
//! The crate splits along the system's seams:
//!
//! - [`record`] — the [`CustodyRecord`]/[`CustodyEvent`] model and its JSON
//!   wire codec. Pure data; no policy.
//! - [`engine`] — the [`TransitionEngine`]: create / transfer / receive,
//!   each a single read-modify-write transaction with role-based
//!   validation against the transfer graph.
//! - [`query`] — read-only lookups that bypass the engine and read the
//!   store directly.
//! - [`bootstrap`] — one-shot ledger seeding.
//!
//! Caller identity is an explicit parameter on every mutating operation;
//! the engine never consults ambient state.

pub mod bootstrap;
pub mod engine;
pub mod query;
pub mod record;

pub use bootstrap::{init_ledger, SEED_PRODUCT_ID};
pub use engine::TransitionEngine;
pub use query::RecordScan;
pub use record::{CustodyEvent, CustodyRecord, EventType, ProductStatus, MANUFACTURING_SITE};
