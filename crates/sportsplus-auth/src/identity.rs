//! Identity check performed before a token is issued.
//!
//! Token issuance signs whatever identity the caller asserts. The
//! [`IdentityVerifier`] seam is where a real credential check (password,
//! upstream OAuth assertion) plugs in; the verifier in [`crate::jwt`] never
//! changes when it does.

use async_trait::async_trait;
use serde_json::{Map, Value};

use sportsplus_core::AppError;

/// Identity claimed by a caller asking for a token.
#[derive(Debug, Clone)]
pub struct IdentityAssertion {
    pub email: String,
    pub extra: Map<String, Value>,
}

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Accepts or rejects the asserted identity.
    ///
    /// # Errors
    ///
    /// Implementations return an unauthorized error to refuse issuance.
    async fn verify(&self, assertion: &IdentityAssertion) -> Result<(), AppError>;
}

/// Trusts the caller's assertion. Authentication is expected upstream
/// (the client signs in with an external identity provider first).
#[derive(Debug, Default, Clone, Copy)]
pub struct SelfAssertedIdentity;

#[async_trait]
impl IdentityVerifier for SelfAssertedIdentity {
    async fn verify(&self, _assertion: &IdentityAssertion) -> Result<(), AppError> {
        Ok(())
    }
}
