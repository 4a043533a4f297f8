//! # Transfer Graph
//!
//! The custody hand-off policy: a directed graph of allowed
//! `(from, to)` organization pairs, plus the designated origin role that is
//! allowed to create records. Validation is set membership — adding a role
//! to a deployment is a configuration change, not a code change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::identity::OrgId;

/// Well-known token of the manufacturing organization in the standard
/// three-role deployment.
pub const MANUFACTURER: &str = "ManufacturerMSP";
/// Well-known token of the distribution organization.
pub const DISTRIBUTOR: &str = "DistributorMSP";
/// Well-known token of the retail organization.
pub const RETAILER: &str = "RetailerMSP";

/// A directed graph of permitted custody hand-offs.
///
/// The graph is fixed at construction and consulted by the transition
/// engine on every transfer. The `origin` role is the only organization
/// permitted to create new custody records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferGraph {
    /// The organization allowed to create records.
    origin: OrgId,
    /// Permitted `(from, to)` hand-off pairs.
    edges: HashSet<(OrgId, OrgId)>,
}

impl TransferGraph {
    /// Create an empty graph with the given origin role.
    pub fn new(origin: OrgId) -> Self {
        Self {
            origin,
            edges: HashSet::new(),
        }
    }

    /// Add a permitted hand-off edge. Returns `self` for builder-style
    /// construction.
    pub fn with_edge(mut self, from: OrgId, to: OrgId) -> Self {
        self.edges.insert((from, to));
        self
    }

    /// The standard supply-chain deployment: manufacturer → distributor →
    /// retailer, with the manufacturer as origin.
    pub fn standard() -> Self {
        let manufacturer = OrgId(MANUFACTURER.to_string());
        let distributor = OrgId(DISTRIBUTOR.to_string());
        let retailer = OrgId(RETAILER.to_string());
        Self::new(manufacturer.clone())
            .with_edge(manufacturer, distributor.clone())
            .with_edge(distributor, retailer)
    }

    /// The organization allowed to create custody records.
    pub fn origin(&self) -> &OrgId {
        &self.origin
    }

    /// Whether `from → to` is a permitted hand-off.
    pub fn allows(&self, from: &OrgId, to: &OrgId) -> bool {
        self.edges.contains(&(from.clone(), to.clone()))
    }

    /// Number of permitted hand-off edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(s: &str) -> OrgId {
        OrgId::new(s).unwrap()
    }

    #[test]
    fn standard_graph_allows_the_two_chain_edges() {
        let graph = TransferGraph::standard();
        assert!(graph.allows(&org(MANUFACTURER), &org(DISTRIBUTOR)));
        assert!(graph.allows(&org(DISTRIBUTOR), &org(RETAILER)));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn standard_graph_rejects_every_other_pair() {
        let graph = TransferGraph::standard();
        let roles = [MANUFACTURER, DISTRIBUTOR, RETAILER];
        let allowed = [(MANUFACTURER, DISTRIBUTOR), (DISTRIBUTOR, RETAILER)];
        for from in roles {
            for to in roles {
                let expected = allowed.contains(&(from, to));
                assert_eq!(graph.allows(&org(from), &org(to)), expected);
            }
        }
    }

    #[test]
    fn standard_origin_is_manufacturer() {
        assert_eq!(TransferGraph::standard().origin(), &org(MANUFACTURER));
    }

    #[test]
    fn custom_graph_extends_without_code_changes() {
        let graph = TransferGraph::standard().with_edge(org(RETAILER), org("RecyclerMSP"));
        assert!(graph.allows(&org(RETAILER), &org("RecyclerMSP")));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn edges_are_directed() {
        let graph = TransferGraph::standard();
        assert!(!graph.allows(&org(DISTRIBUTOR), &org(MANUFACTURER)));
    }

    #[test]
    fn graph_serde_round_trip() {
        let graph = TransferGraph::standard();
        let json = serde_json::to_string(&graph).unwrap();
        let back: TransferGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(graph, back);
    }
}
