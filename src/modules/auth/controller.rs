use axum::{Json, extract::State};
use tracing::instrument;

use sportsplus_core::{AppError, ErrorResponse};
use sportsplus_models::{TokenRequest, TokenResponse};

use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Issue a one-hour bearer token for the posted identity
///
/// Fields other than `email` are carried into the token as extra claims.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Identity rejected", body = ErrorResponse),
        (status = 422, description = "Invalid email", body = ErrorResponse),
        (status = 429, description = "Too many requests")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, request))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::issue_token(
        state.identity_verifier.as_ref(),
        &state.jwt_config,
        request,
    )
    .await?;

    Ok(Json(response))
}
