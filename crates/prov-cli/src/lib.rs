#![deny(missing_docs)]

//! # prov-cli — Operator CLI for the Provenance Stack
//!
//! Drives the custody core against a file-snapshotted [`MemoryLedger`]:
//! each invocation loads the ledger snapshot, runs one operation, and (for
//! mutations) writes the snapshot back. Caller identity comes from the
//! global `--as <org>` flag, resolved through the [`StaticIdentity`]
//! adapter and passed to the engine explicitly.
//!
//! [`MemoryLedger`]: prov_ledger::MemoryLedger
//! [`StaticIdentity`]: prov_ledger::StaticIdentity

pub mod commands;
pub mod snapshot;
