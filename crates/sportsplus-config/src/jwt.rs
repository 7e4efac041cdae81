use std::env;

use crate::env_or;

/// Token lifetime used when `JWT_ACCESS_EXPIRY` is unset.
pub const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("ACCESS_TOKEN_SECRET")
                .or_else(|_| env::var("JWT_SECRET"))
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env_or("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_EXPIRY_SECS),
        }
    }
}
