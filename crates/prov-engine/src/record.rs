//! # Custody Record Model
//!
//! Pure data plus (de)serialization to the Ledger Store's value
//! representation. The model enforces shape, not policy: who may perform a
//! transition lives in [`crate::engine`]; this module only knows how a
//! record changes once a transition has been approved.
//!
//! ## Wire Encoding
//!
//! Records persist as JSON objects with exactly these field names:
//! `productID`, `name`, `description`, `manufacturer`, `manufactureDate`,
//! `currentOwner`, `currentLocation`, `status`, `history`; events carry
//! `eventType`, `from`, `to`, `location`, `timestamp`, `handler`,
//! `description`. The encoding round-trips losslessly.

use serde::{Deserialize, Serialize};

use prov_core::{OrgId, ProductId, StoreError, Timestamp};

/// Location sentinel assigned to every freshly created record.
pub const MANUFACTURING_SITE: &str = "Manufacturing Facility";

/// Lifecycle status of a custody record.
///
/// Moves only along `CREATED → IN_TRANSIT → DELIVERED`; a delivered item
/// re-enters `IN_TRANSIT` when its owner initiates a new transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductStatus {
    /// Freshly created, still with the manufacturer.
    #[serde(rename = "CREATED")]
    Created,
    /// Handed off; awaiting confirmation of physical custody.
    #[serde(rename = "IN_TRANSIT")]
    InTransit,
    /// Physical custody confirmed by the current owner.
    #[serde(rename = "DELIVERED")]
    Delivered,
}

/// Kind of a single custody event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Record creation.
    #[serde(rename = "CREATED")]
    Created,
    /// Custody hand-off to another organization.
    #[serde(rename = "TRANSFERRED")]
    Transferred,
    /// Confirmation of physical custody by the owner.
    #[serde(rename = "RECEIVED")]
    Received,
}

/// One immutable entry in a record's append-only history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodyEvent {
    /// What happened.
    pub event_type: EventType,
    /// The organization relinquishing custody; `None` (wire: empty string)
    /// for the initial creation event.
    #[serde(with = "org_or_empty")]
    pub from: Option<OrgId>,
    /// The organization taking (or confirming) custody.
    pub to: OrgId,
    /// Where the event took place.
    pub location: String,
    /// When the event was recorded.
    pub timestamp: Timestamp,
    /// The organization that invoked the operation.
    pub handler: OrgId,
    /// Human-readable summary.
    pub description: String,
}

/// The per-item custody state entity, persisted under its `productID` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustodyRecord {
    /// Unique identifier; doubles as the ledger key.
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    /// Descriptive name, set at creation.
    pub name: String,
    /// Descriptive text, set at creation.
    pub description: String,
    /// The organization that created the record.
    pub manufacturer: OrgId,
    /// When the record was created.
    pub manufacture_date: Timestamp,
    /// The organization currently holding custody.
    pub current_owner: OrgId,
    /// Free-text location of the item.
    pub current_location: String,
    /// Lifecycle status.
    pub status: ProductStatus,
    /// Append-only event history, insertion order = chronological order.
    pub history: Vec<CustodyEvent>,
}

impl CustodyRecord {
    /// Build a fresh record for `manufacturer`, with a one-entry `CREATED`
    /// history and the manufacturing-site location sentinel.
    pub fn create(
        product_id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        manufacturer: OrgId,
        now: Timestamp,
    ) -> Self {
        let initial_event = CustodyEvent {
            event_type: EventType::Created,
            from: None,
            to: manufacturer.clone(),
            location: MANUFACTURING_SITE.to_string(),
            timestamp: now,
            handler: manufacturer.clone(),
            description: "Product created by manufacturer".to_string(),
        };
        Self {
            product_id,
            name: name.into(),
            description: description.into(),
            manufacturer: manufacturer.clone(),
            manufacture_date: now,
            current_owner: manufacturer,
            current_location: MANUFACTURING_SITE.to_string(),
            status: ProductStatus::Created,
            history: vec![initial_event],
        }
    }

    /// Apply an approved hand-off: append a `TRANSFERRED` event and move
    /// ownership, location, and status.
    pub fn apply_transfer(
        &mut self,
        to: OrgId,
        location: impl Into<String>,
        handler: OrgId,
        now: Timestamp,
    ) {
        let location = location.into();
        let from = self.current_owner.clone();
        self.history.push(CustodyEvent {
            event_type: EventType::Transferred,
            from: Some(from.clone()),
            to: to.clone(),
            location: location.clone(),
            timestamp: now,
            handler,
            description: format!("Product transferred from {from} to {to}"),
        });
        self.current_owner = to;
        self.current_location = location;
        self.status = ProductStatus::InTransit;
    }

    /// Apply an approved receipt: append a `RECEIVED` event and close the
    /// transit leg. Ownership is unchanged — the receiver already owns the
    /// item via the preceding transfer.
    pub fn apply_receive(&mut self, location: impl Into<String>, handler: OrgId, now: Timestamp) {
        let location = location.into();
        let owner = self.current_owner.clone();
        self.history.push(CustodyEvent {
            event_type: EventType::Received,
            from: Some(owner.clone()),
            to: owner.clone(),
            location: location.clone(),
            timestamp: now,
            handler,
            description: format!("Product received by {owner}"),
        });
        self.current_location = location;
        self.status = ProductStatus::Delivered;
    }

    /// The ledger key this record persists under.
    pub fn key(&self) -> &str {
        self.product_id.as_str()
    }

    /// Encode to the store's value representation.
    pub fn encode(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from the store's value representation. Failure means the
    /// stored data is corrupt and aborts the operation in progress.
    pub fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Serde shim: the wire format uses an empty string where no `from`
/// organization exists (the initial `CREATED` event).
mod org_or_empty {
    use serde::{Deserialize, Deserializer, Serializer};

    use prov_core::OrgId;

    pub fn serialize<S: Serializer>(value: &Option<OrgId>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(org) => s.serialize_str(org.as_str()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<OrgId>, D::Error> {
        let s = String::deserialize(d)?;
        if s.is_empty() {
            Ok(None)
        } else {
            OrgId::new(s).map(Some).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn org(s: &str) -> OrgId {
        OrgId::new(s).unwrap()
    }

    fn sample() -> CustodyRecord {
        CustodyRecord::create(
            ProductId::new("PROD001").unwrap(),
            "Widget",
            "A sample widget",
            org("ManufacturerMSP"),
            Timestamp::now(),
        )
    }

    #[test]
    fn create_builds_one_entry_created_history() {
        let record = sample();
        assert_eq!(record.status, ProductStatus::Created);
        assert_eq!(record.current_owner, org("ManufacturerMSP"));
        assert_eq!(record.current_location, MANUFACTURING_SITE);
        assert_eq!(record.history.len(), 1);
        let event = &record.history[0];
        assert_eq!(event.event_type, EventType::Created);
        assert_eq!(event.from, None);
        assert_eq!(event.to, org("ManufacturerMSP"));
        assert_eq!(event.handler, org("ManufacturerMSP"));
    }

    #[test]
    fn transfer_moves_owner_location_and_status() {
        let mut record = sample();
        record.apply_transfer(
            org("DistributorMSP"),
            "Warehouse1",
            org("ManufacturerMSP"),
            Timestamp::now(),
        );

        assert_eq!(record.status, ProductStatus::InTransit);
        assert_eq!(record.current_owner, org("DistributorMSP"));
        assert_eq!(record.current_location, "Warehouse1");
        assert_eq!(record.history.len(), 2);
        let event = &record.history[1];
        assert_eq!(event.event_type, EventType::Transferred);
        assert_eq!(event.from, Some(org("ManufacturerMSP")));
        assert_eq!(event.to, org("DistributorMSP"));
        assert!(event.description.contains("ManufacturerMSP"));
        assert!(event.description.contains("DistributorMSP"));
    }

    #[test]
    fn receive_keeps_owner_and_delivers() {
        let mut record = sample();
        record.apply_transfer(
            org("DistributorMSP"),
            "Warehouse1",
            org("ManufacturerMSP"),
            Timestamp::now(),
        );
        record.apply_receive("Store1", org("DistributorMSP"), Timestamp::now());

        assert_eq!(record.status, ProductStatus::Delivered);
        assert_eq!(record.current_owner, org("DistributorMSP"));
        assert_eq!(record.current_location, "Store1");
        let event = &record.history[2];
        assert_eq!(event.event_type, EventType::Received);
        // from == to by construction on a receive.
        assert_eq!(event.from, Some(org("DistributorMSP")));
        assert_eq!(event.to, org("DistributorMSP"));
    }

    #[test]
    fn wire_field_names_match_the_ledger_contract() {
        let record = sample();
        let value: serde_json::Value =
            serde_json::from_slice(&record.encode().unwrap()).unwrap();

        for field in [
            "productID",
            "name",
            "description",
            "manufacturer",
            "manufactureDate",
            "currentOwner",
            "currentLocation",
            "status",
            "history",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["status"], json!("CREATED"));

        let event = &value["history"][0];
        for field in [
            "eventType",
            "from",
            "to",
            "location",
            "timestamp",
            "handler",
            "description",
        ] {
            assert!(event.get(field).is_some(), "missing event field {field}");
        }
        assert_eq!(event["eventType"], json!("CREATED"));
        assert_eq!(event["from"], json!(""));
    }

    #[test]
    fn codec_round_trip_is_lossless() {
        let mut record = sample();
        record.apply_transfer(
            org("DistributorMSP"),
            "Warehouse1",
            org("ManufacturerMSP"),
            Timestamp::now(),
        );
        record.apply_receive("Store1", org("DistributorMSP"), Timestamp::now());

        let decoded = CustodyRecord::decode(&record.encode().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn decode_rejects_corrupt_bytes() {
        assert!(matches!(
            CustodyRecord::decode(b"{\"productID\":"),
            Err(StoreError::Codec(_))
        ));
    }

    #[test]
    fn status_strings_are_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::InTransit).unwrap(),
            "\"IN_TRANSIT\""
        );
        assert_eq!(
            serde_json::to_string(&EventType::Transferred).unwrap(),
            "\"TRANSFERRED\""
        );
    }
}
