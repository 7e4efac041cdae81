//! Token issuance DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

/// Identity payload posted to `/jwt`. Fields beyond `email` are signed into
/// the token as extra claims.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
