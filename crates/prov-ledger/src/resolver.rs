//! # Identity Resolver Contract
//!
//! The second collaborator boundary: given the current invocation context,
//! produce the caller's organizational identity token.
//!
//! The transition engine itself never calls this trait — caller identity is
//! an explicit parameter on every engine operation, so the core is testable
//! with synthetic identities. The resolver sits at the hosting boundary
//! (the CLI, or a platform shim) and produces the token that gets passed
//! in.

use prov_core::{OrgId, StoreError};

/// Resolves the caller's organizational identity for the current
/// invocation.
pub trait IdentityResolver {
    /// The identity token of the invoking organization.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Identity`] when the hosting platform cannot
    /// attribute the invocation.
    fn caller(&self) -> Result<OrgId, StoreError>;
}

/// A resolver that always yields one fixed identity. Used by the CLI
/// (`--as <org>`) and by tests.
#[derive(Debug, Clone)]
pub struct StaticIdentity(OrgId);

impl StaticIdentity {
    /// Create a resolver pinned to the given organization.
    pub fn new(org: OrgId) -> Self {
        Self(org)
    }
}

impl IdentityResolver for StaticIdentity {
    fn caller(&self) -> Result<OrgId, StoreError> {
        Ok(self.0.clone())
    }
}
