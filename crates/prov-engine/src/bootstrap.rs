//! # Ledger Bootstrap
//!
//! Seeds one initial custody record. Deliberately thin: the seed write is
//! unconditional, so re-running overwrites the seed key — idempotency is
//! not guaranteed.

use prov_core::{CustodyError, ProductId, StoreError, Timestamp, TransferGraph};
use prov_ledger::LedgerStore;

use crate::record::CustodyRecord;

/// Key of the seed record written by [`init_ledger`].
pub const SEED_PRODUCT_ID: &str = "PROD001";

/// Write the seed record for the standard three-role deployment.
///
/// The seed belongs to the standard graph's origin (the manufacturer) and
/// carries a one-entry `CREATED` history like any other freshly created
/// record.
pub fn init_ledger<S: LedgerStore>(store: &mut S) -> Result<CustodyRecord, CustodyError> {
    let product_id = ProductId::new(SEED_PRODUCT_ID)
        .map_err(|e| StoreError::Backend(e.to_string()))?;
    let manufacturer = TransferGraph::standard().origin().clone();

    let record = CustodyRecord::create(
        product_id,
        "Sample Product",
        "Initial product for testing",
        manufacturer,
        Timestamp::now(),
    );
    store.put(record.key(), record.encode()?)?;
    tracing::info!(product = %record.product_id, "ledger seeded");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prov_core::MANUFACTURER;
    use prov_ledger::MemoryLedger;

    use crate::query;
    use crate::record::{EventType, ProductStatus};

    #[test]
    fn seed_record_is_well_formed() {
        let mut ledger = MemoryLedger::new();
        let record = init_ledger(&mut ledger).unwrap();

        assert_eq!(record.product_id.as_str(), SEED_PRODUCT_ID);
        assert_eq!(record.status, ProductStatus::Created);
        assert_eq!(record.current_owner.as_str(), MANUFACTURER);
        assert_eq!(record.history.len(), 1);
        assert_eq!(record.history[0].event_type, EventType::Created);

        let stored = query::get_by_id(&ledger, &record.product_id).unwrap();
        assert_eq!(stored, record);
    }

    #[test]
    fn seed_id_is_a_valid_product_token() {
        assert_eq!(
            ProductId::new(SEED_PRODUCT_ID).unwrap().as_str(),
            SEED_PRODUCT_ID
        );
    }

    #[test]
    fn rerunning_overwrites_the_seed_key() {
        let mut ledger = MemoryLedger::new();
        init_ledger(&mut ledger).unwrap();
        init_ledger(&mut ledger).unwrap();

        // Still one live record, but two committed versions of the key.
        assert_eq!(ledger.key_count(), 1);
        assert_eq!(ledger.key_version_history(SEED_PRODUCT_ID).unwrap().len(), 2);
    }
}
