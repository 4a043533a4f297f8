//! # In-Memory Reference Adapter
//!
//! A [`MemoryLedger`] implements the full store contract against a
//! `BTreeMap`, which yields lexicographic scan order for free. Every `put`
//! appends a version entry, so per-key version history works exactly as on
//! a ledger-backed deployment — including writes that repeat the previous
//! value.
//!
//! The adapter is serde-serializable so the CLI can snapshot a ledger to
//! disk between invocations. It makes no concurrency claims: one adapter,
//! one invocation at a time, matching the transaction scoping of the trait.

use std::collections::BTreeMap;
use std::ops::Bound;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prov_core::StoreError;

use crate::store::{IndexSelector, LedgerStore, ScanIter, VersionId};

/// One committed write to a key.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct VersionEntry {
    version: VersionId,
    value: Vec<u8>,
}

/// In-memory versioned key-value store.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    entries: BTreeMap<String, Vec<VersionEntry>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    fn bounds<'a>(start: &'a str, end: &'a str) -> (Bound<&'a str>, Bound<&'a str>) {
        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };
        (lower, upper)
    }
}

impl LedgerStore for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .entries
            .get(key)
            .and_then(|versions| versions.last())
            .map(|entry| entry.value.clone()))
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(VersionEntry {
                version: VersionId::new(Uuid::new_v4().to_string()),
                value,
            });
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>, StoreError> {
        // A reversed range selects nothing; BTreeMap::range would panic.
        if !start.is_empty() && !end.is_empty() && start > end {
            return Ok(Box::new(std::iter::empty()));
        }
        let range = self.entries.range::<str, _>(Self::bounds(start, end));
        Ok(Box::new(range.filter_map(|(key, versions)| {
            versions
                .last()
                .map(|entry| Ok((key.clone(), entry.value.clone())))
        })))
    }

    fn index_query(&self, selector: &IndexSelector) -> Result<ScanIter<'_>, StoreError> {
        let selector = selector.clone();
        Ok(Box::new(self.entries.iter().filter_map(
            move |(key, versions)| {
                let entry = versions.last()?;
                let decoded: serde_json::Value = match serde_json::from_slice(&entry.value) {
                    Ok(v) => v,
                    Err(e) => return Some(Err(StoreError::Codec(e))),
                };
                let matches = decoded
                    .get(&selector.field)
                    .and_then(serde_json::Value::as_str)
                    == Some(selector.value.as_str());
                matches.then(|| Ok((key.clone(), entry.value.clone())))
            },
        )))
    }

    fn key_version_history(&self, key: &str) -> Result<Vec<(VersionId, Vec<u8>)>, StoreError> {
        Ok(self
            .entries
            .get(key)
            .map(|versions| {
                versions
                    .iter()
                    .map(|entry| (entry.version.clone(), entry.value.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}
