//! JWT (JSON Web Token) utilities.
//!
//! Tokens are HS256-signed with the shared secret from [`JwtConfig`] and
//! carry the [`Claims`] set. Verification checks signature and expiry; any
//! failure maps to a 401 [`AppError`].

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};

use sportsplus_config::JwtConfig;
use sportsplus_core::AppError;

use crate::claims::Claims;

/// Creates an access token for `email`, carrying `extra` as additional claims.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    email: &str,
    mut extra: Map<String, Value>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    // reserved claims are always server-controlled
    for reserved in ["email", "exp", "iat"] {
        extra.remove(reserved);
    }

    let claims = Claims {
        email: email.to_string(),
        extra,
        exp,
        iat: now,
    };

    encode_claims(&claims, jwt_config)
}

/// Signs an already-built claim set.
pub fn encode_claims(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry, returning the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, expired, or was
/// signed with a different secret.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("unauthorized access".to_string()))
}

/// Pulls the token out of an `Authorization` header value.
///
/// # Errors
///
/// Unauthorized when the header is absent, not a `Bearer` credential, or empty.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header =
        header.ok_or_else(|| AppError::unauthorized("unauthorized access".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AppError::unauthorized("unauthorized access".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn status_of(err: AppError) -> u16 {
        err.status.as_u16()
    }

    #[test]
    fn test_create_and_verify_round_trip() {
        let config = get_test_jwt_config();
        let mut extra = Map::new();
        extra.insert("name".to_string(), Value::String("Ada".to_string()));

        let token = create_access_token("ada@example.com", extra, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.extra["name"], "Ada");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_reserved_claims_cannot_be_overridden() {
        let config = get_test_jwt_config();
        let mut extra = Map::new();
        extra.insert("exp".to_string(), Value::from(9_999_999_999u64));
        extra.insert("email".to_string(), Value::from("admin@example.com"));

        let token = create_access_token("ada@example.com", extra, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let err = verify_token("invalid-token", &config).unwrap_err();
        assert_eq!(status_of(err), 401);
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token("ada@example.com", Map::new(), &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        let err = verify_token(&token, &wrong_config).unwrap_err();
        assert_eq!(status_of(err), 401);
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            email: "ada@example.com".to_string(),
            extra: Map::new(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode_claims(&claims, &config).unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert_eq!(status_of(err), 401);
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert_eq!(bearer_token(Some("bearer abc")).unwrap(), "abc");
        assert!(bearer_token(None).is_err());
        assert!(bearer_token(Some("Basic dXNlcjpwYXNz")).is_err());
        assert!(bearer_token(Some("Bearer ")).is_err());
    }
}
