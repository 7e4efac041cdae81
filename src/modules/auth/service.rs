use tracing::instrument;

use sportsplus_auth::{IdentityAssertion, IdentityVerifier, create_access_token};
use sportsplus_config::JwtConfig;
use sportsplus_core::AppError;
use sportsplus_models::{TokenRequest, TokenResponse};

use crate::metrics::track_jwt_issued;

pub struct AuthService;

impl AuthService {
    /// Signs the asserted identity once the verifier accepts it.
    #[instrument(skip(verifier, jwt_config, request), fields(email = %request.email))]
    pub async fn issue_token(
        verifier: &dyn IdentityVerifier,
        jwt_config: &JwtConfig,
        request: TokenRequest,
    ) -> Result<TokenResponse, AppError> {
        let assertion = IdentityAssertion {
            email: request.email,
            extra: request.extra,
        };
        verifier.verify(&assertion).await?;

        let token = create_access_token(&assertion.email, assertion.extra, jwt_config)?;
        track_jwt_issued();

        Ok(TokenResponse { token })
    }
}
