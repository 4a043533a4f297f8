#![deny(missing_docs)]

//! # prov-ledger — Collaborator Contracts
//!
//! The custody core's boundary is two narrow trait contracts, both defined
//! here: the versioned key-value [`LedgerStore`] and the caller
//! [`IdentityResolver`]. The hosting platform (ordering, endorsement,
//! commitment, identity issuance) lives entirely behind them.
//!
//! The crate also ships the in-memory reference adapter, [`MemoryLedger`],
//! which implements the full store contract — including per-key version
//! history and field-indexed queries — for tests and the operator CLI.

pub mod memory;
pub mod resolver;
pub mod store;

pub use memory::MemoryLedger;
pub use resolver::{IdentityResolver, StaticIdentity};
pub use store::{IndexSelector, LedgerStore, ScanIter, VersionId};
