//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the two identifier kinds in the custody
//! core. Each is a distinct type — you cannot pass a [`ProductId`] where an
//! [`OrgId`] is expected.
//!
//! ## Validation
//!
//! Both identifiers validate at construction time: non-empty, no
//! whitespace. The hosting platform issues the actual tokens (MSP-style
//! strings such as `ManufacturerMSP`); the core treats them as opaque
//! beyond those two rules.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The identity token of an organization, as issued by the hosting
/// platform's identity layer.
///
/// The custody core never inspects the token beyond equality: ownership
/// checks and transfer-graph membership both compare whole tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgId(pub(crate) String);

impl OrgId {
    /// Create an organization identity from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOrgId`] if the string is empty or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidOrgId(s));
        }
        Ok(Self(s))
    }

    /// Access the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The unique identifier of a tracked product. Immutable once assigned;
/// doubles as the ledger key the custody record is persisted under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub(crate) String);

impl ProductId {
    /// Create a product identifier from a string, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProductId`] if the string is empty
    /// or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidProductId(s));
        }
        Ok(Self(s))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
