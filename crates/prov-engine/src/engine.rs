//! # Transition Engine
//!
//! Validates and applies custody state transitions. Each operation is one
//! read-modify-write transaction against the Ledger Store: read the current
//! record (or confirm absence for create), validate the caller against the
//! transfer graph and ownership, build the complete new record value in
//! memory, and issue a single write. Partial state is never observable.
//!
//! Caller identity is an explicit parameter — the engine never reads it
//! from ambient context. Concurrency control across simultaneous
//! invocations belongs to the store's transaction boundary; the engine
//! holds no locks and never retries.

use prov_core::{CustodyError, OrgId, ProductId, Timestamp, TransferGraph};
use prov_ledger::LedgerStore;

use crate::record::CustodyRecord;

/// The custody transition engine, generic over its store.
#[derive(Debug)]
pub struct TransitionEngine<S: LedgerStore> {
    store: S,
    graph: TransferGraph,
}

impl<S: LedgerStore> TransitionEngine<S> {
    /// Create an engine over `store` with the standard three-role transfer
    /// graph.
    pub fn new(store: S) -> Self {
        Self::with_graph(store, TransferGraph::standard())
    }

    /// Create an engine over `store` with a custom transfer graph.
    pub fn with_graph(store: S, graph: TransferGraph) -> Self {
        Self { store, graph }
    }

    /// Read access to the underlying store, for the query layer.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine and reclaim the store (snapshot persistence).
    pub fn into_store(self) -> S {
        self.store
    }

    /// The transfer graph this engine enforces.
    pub fn graph(&self) -> &TransferGraph {
        &self.graph
    }

    /// Create a new custody record.
    ///
    /// The caller must be the transfer graph's origin role, and
    /// `product_id` must not already exist on the ledger.
    pub fn create(
        &mut self,
        caller: &OrgId,
        product_id: &ProductId,
        name: &str,
        description: &str,
    ) -> Result<CustodyRecord, CustodyError> {
        if caller != self.graph.origin() {
            return Err(CustodyError::Unauthorized {
                caller: caller.clone(),
                action: "create products".to_string(),
            });
        }
        if self.store.get(product_id.as_str())?.is_some() {
            return Err(CustodyError::AlreadyExists(product_id.clone()));
        }

        let record = CustodyRecord::create(
            product_id.clone(),
            name,
            description,
            caller.clone(),
            Timestamp::now(),
        );
        self.store.put(record.key(), record.encode()?)?;
        tracing::info!(product = %product_id, owner = %caller, "custody record created");
        Ok(record)
    }

    /// Hand custody of `product_id` to `to_org`.
    ///
    /// The caller must be the current owner, and `(caller, to_org)` must be
    /// an edge of the transfer graph.
    pub fn transfer(
        &mut self,
        caller: &OrgId,
        product_id: &ProductId,
        to_org: &OrgId,
        location: &str,
    ) -> Result<CustodyRecord, CustodyError> {
        let mut record = self.load(product_id)?;

        if &record.current_owner != caller {
            return Err(CustodyError::Unauthorized {
                caller: caller.clone(),
                action: format!("transfer product {product_id}"),
            });
        }
        if !self.graph.allows(caller, to_org) {
            return Err(CustodyError::InvalidTransition {
                from: caller.clone(),
                to: to_org.clone(),
            });
        }

        record.apply_transfer(to_org.clone(), location, caller.clone(), Timestamp::now());
        self.store.put(record.key(), record.encode()?)?;
        tracing::info!(
            product = %product_id,
            from = %caller,
            to = %to_org,
            "custody transferred"
        );
        Ok(record)
    }

    /// Confirm physical custody of `product_id` at `location`.
    ///
    /// The caller must be the current owner. Prior status is deliberately
    /// unrestricted: receiving closes whatever transit leg is open, and
    /// re-receiving a delivered item is permitted.
    pub fn receive(
        &mut self,
        caller: &OrgId,
        product_id: &ProductId,
        location: &str,
    ) -> Result<CustodyRecord, CustodyError> {
        let mut record = self.load(product_id)?;

        if &record.current_owner != caller {
            return Err(CustodyError::Unauthorized {
                caller: caller.clone(),
                action: format!("receive product {product_id}"),
            });
        }

        record.apply_receive(location, caller.clone(), Timestamp::now());
        self.store.put(record.key(), record.encode()?)?;
        tracing::info!(product = %product_id, owner = %caller, "custody receipt confirmed");
        Ok(record)
    }

    /// Load and decode the current record, or `NotFound`.
    fn load(&self, product_id: &ProductId) -> Result<CustodyRecord, CustodyError> {
        tracing::debug!(product = %product_id, "loading custody record");
        let bytes = self
            .store
            .get(product_id.as_str())?
            .ok_or_else(|| CustodyError::NotFound(product_id.clone()))?;
        Ok(CustodyRecord::decode(&bytes)?)
    }
}
