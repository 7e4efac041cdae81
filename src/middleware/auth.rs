use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use sportsplus_auth::{Claims, bearer_token, verify_token};
use sportsplus_core::AppError;

use crate::state::AppState;

/// Extractor that validates the bearer token and provides the caller's claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Fails with 403 unless `email` is the caller's own address.
    pub fn ensure_owns(&self, email: &str) -> Result<(), AppError> {
        if self.email() != email {
            return Err(AppError::forbidden("forbidden access".to_string()));
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = bearer_token(auth_header)?;
        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
