//! # Query Layer
//!
//! Read-only operations over the Ledger Store. Queries bypass the
//! transition engine and carry no identity checks — read transparency is
//! preserved from the source system (see DESIGN.md).
//!
//! A store or codec failure mid-query aborts the whole query; partial
//! results are never silently delivered.

use prov_core::{CustodyError, OrgId, ProductId};
use prov_ledger::{IndexSelector, LedgerStore, ScanIter, VersionId};

use crate::record::{CustodyEvent, CustodyRecord};

/// Whether a record exists under `product_id`. Absence is not an error.
pub fn exists<S: LedgerStore>(store: &S, product_id: &ProductId) -> Result<bool, CustodyError> {
    Ok(store.get(product_id.as_str())?.is_some())
}

/// Point lookup of a single record.
pub fn get_by_id<S: LedgerStore>(
    store: &S,
    product_id: &ProductId,
) -> Result<CustodyRecord, CustodyError> {
    let bytes = store
        .get(product_id.as_str())?
        .ok_or_else(|| CustodyError::NotFound(product_id.clone()))?;
    Ok(CustodyRecord::decode(&bytes)?)
}

/// The record's embedded event history, in chronological order.
pub fn get_history<S: LedgerStore>(
    store: &S,
    product_id: &ProductId,
) -> Result<Vec<CustodyEvent>, CustodyError> {
    Ok(get_by_id(store, product_id)?.history)
}

/// Stream every record on the ledger, in lexicographic key order.
///
/// The scan is lazy: records decode one at a time, so callers can bound
/// cost by taking a prefix. The iterator is finite and not restartable
/// mid-stream. An `Err` item means the scan is corrupt past that point and
/// must be abandoned.
pub fn scan_all<S: LedgerStore>(store: &S) -> Result<RecordScan<'_>, CustodyError> {
    Ok(RecordScan {
        inner: store.range_scan("", "")?,
    })
}

/// All records whose `currentOwner` equals `owner`, via the store's
/// secondary-index capability.
pub fn get_by_owner<S: LedgerStore>(
    store: &S,
    owner: &OrgId,
) -> Result<Vec<CustodyRecord>, CustodyError> {
    let selector = IndexSelector::equals("currentOwner", owner.as_str());
    decode_pairs(store.index_query(&selector)?)
}

/// The store's per-key version log for `product_id`: every committed write,
/// oldest first, including writes that produced identical values. Distinct
/// from the record's embedded history.
pub fn get_version_history<S: LedgerStore>(
    store: &S,
    product_id: &ProductId,
) -> Result<Vec<(VersionId, CustodyRecord)>, CustodyError> {
    store
        .key_version_history(product_id.as_str())?
        .into_iter()
        .map(|(version, bytes)| Ok((version, CustodyRecord::decode(&bytes)?)))
        .collect()
}

/// Lazy decoding iterator over a range scan. Produced by [`scan_all`].
pub struct RecordScan<'a> {
    inner: ScanIter<'a>,
}

impl Iterator for RecordScan<'_> {
    type Item = Result<CustodyRecord, CustodyError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        Some(
            item.and_then(|(_, bytes)| CustodyRecord::decode(&bytes))
                .map_err(CustodyError::from),
        )
    }
}

fn decode_pairs(iter: ScanIter<'_>) -> Result<Vec<CustodyRecord>, CustodyError> {
    iter.map(|item| {
        let (_, bytes) = item?;
        CustodyRecord::decode(&bytes).map_err(CustodyError::from)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prov_core::{StoreError, DISTRIBUTOR, MANUFACTURER};
    use prov_ledger::MemoryLedger;

    use crate::engine::TransitionEngine;
    use crate::record::EventType;

    fn org(s: &str) -> OrgId {
        OrgId::new(s).unwrap()
    }

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    fn seeded_engine() -> TransitionEngine<MemoryLedger> {
        let mut engine = TransitionEngine::new(MemoryLedger::new());
        engine
            .create(&org(MANUFACTURER), &pid("P1"), "Widget", "desc")
            .unwrap();
        engine
            .create(&org(MANUFACTURER), &pid("P2"), "Gadget", "desc")
            .unwrap();
        engine
    }

    #[test]
    fn exists_reports_presence_without_error() {
        let engine = seeded_engine();
        assert!(exists(engine.store(), &pid("P1")).unwrap());
        assert!(!exists(engine.store(), &pid("P9")).unwrap());
    }

    #[test]
    fn get_by_id_round_trips_the_record() {
        let engine = seeded_engine();
        let record = get_by_id(engine.store(), &pid("P1")).unwrap();
        assert_eq!(record.name, "Widget");
    }

    #[test]
    fn get_by_id_of_missing_key_is_not_found() {
        let engine = seeded_engine();
        assert!(matches!(
            get_by_id(engine.store(), &pid("P9")),
            Err(CustodyError::NotFound(_))
        ));
    }

    #[test]
    fn get_history_is_chronological() {
        let mut engine = seeded_engine();
        engine
            .transfer(&org(MANUFACTURER), &pid("P1"), &org(DISTRIBUTOR), "W1")
            .unwrap();

        let history = get_history(engine.store(), &pid("P1")).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].event_type, EventType::Created);
        assert_eq!(history[1].event_type, EventType::Transferred);
    }

    #[test]
    fn scan_all_streams_records_in_key_order() {
        let engine = seeded_engine();
        let records: Vec<CustodyRecord> = scan_all(engine.store())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.product_id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2"]);
    }

    #[test]
    fn scan_all_can_be_bounded_by_the_caller() {
        let engine = seeded_engine();
        let first: Vec<_> = scan_all(engine.store()).unwrap().take(1).collect();
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn scan_all_surfaces_corruption_as_an_error_item() {
        let mut ledger = MemoryLedger::new();
        ledger.put("bad", b"corrupt".to_vec()).unwrap();

        let mut scan = scan_all(&ledger).unwrap();
        assert!(matches!(
            scan.next(),
            Some(Err(CustodyError::Store(StoreError::Codec(_))))
        ));
    }

    #[test]
    fn get_by_owner_tracks_current_ownership() {
        let mut engine = seeded_engine();
        engine
            .transfer(&org(MANUFACTURER), &pid("P1"), &org(DISTRIBUTOR), "W1")
            .unwrap();

        let distributor_held = get_by_owner(engine.store(), &org(DISTRIBUTOR)).unwrap();
        assert_eq!(distributor_held.len(), 1);
        assert_eq!(distributor_held[0].product_id, pid("P1"));

        let manufacturer_held = get_by_owner(engine.store(), &org(MANUFACTURER)).unwrap();
        assert_eq!(manufacturer_held.len(), 1);
        assert_eq!(manufacturer_held[0].product_id, pid("P2"));
    }

    #[test]
    fn version_history_exposes_every_committed_write() {
        let mut engine = seeded_engine();
        engine
            .transfer(&org(MANUFACTURER), &pid("P1"), &org(DISTRIBUTOR), "W1")
            .unwrap();
        engine
            .receive(&org(DISTRIBUTOR), &pid("P1"), "W1")
            .unwrap();

        let versions = get_version_history(engine.store(), &pid("P1")).unwrap();
        assert_eq!(versions.len(), 3);
        // Snapshots are ordered oldest-first and reflect each commit.
        assert_eq!(versions[0].1.history.len(), 1);
        assert_eq!(versions[1].1.history.len(), 2);
        assert_eq!(versions[2].1.history.len(), 3);
    }

    #[test]
    fn version_history_of_absent_key_is_empty() {
        let engine = seeded_engine();
        assert!(get_version_history(engine.store(), &pid("P9"))
            .unwrap()
            .is_empty());
    }
}
