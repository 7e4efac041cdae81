//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Claims embedded in an access token.
///
/// `email` identifies the caller for ownership checks and the admin lookup.
/// Any other fields supplied at issuance travel in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Caller's email address
    pub email: String,
    /// Additional caller-supplied fields
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_flattens_extra() {
        let mut extra = Map::new();
        extra.insert("name".to_string(), Value::String("Ada".to_string()));
        let claims = Claims {
            email: "ada@example.com".to_string(),
            extra,
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""email":"ada@example.com""#));
        assert!(serialized.contains(r#""name":"Ada""#));
        assert!(!serialized.contains("extra"));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"email":"user@test.com","photo":"p.png","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email, "user@test.com");
        assert_eq!(claims.exp, 9999999999);
        assert_eq!(claims.extra.get("photo"), Some(&Value::String("p.png".into())));
        assert!(!claims.extra.contains_key("email"));
    }

    #[test]
    fn test_claims_require_email() {
        let json = r#"{"exp":9999999999,"iat":9999999900}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
