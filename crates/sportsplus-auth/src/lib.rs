//! # Sports Plus Auth
//!
//! Bearer token handling for the Sports Plus API.
//!
//! - [`claims`]: the claim set carried by access tokens
//! - [`jwt`]: token creation, verification and header parsing
//! - [`identity`]: the identity check that runs before a token is issued
//!
//! # Example
//!
//! ```ignore
//! use sportsplus_auth::{create_access_token, verify_token};
//! use sportsplus_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("student@example.com", Default::default(), &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email, "student@example.com");
//! ```

pub mod claims;
pub mod identity;
pub mod jwt;

pub use claims::Claims;
pub use identity::{IdentityAssertion, IdentityVerifier, SelfAssertedIdentity};
pub use jwt::{bearer_token, create_access_token, encode_claims, verify_token};
