//! Admin guard for axum routes.
//!
//! Roles live in the database rather than the token, so the guard performs
//! one user lookup per request.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use sportsplus_core::AppError;
use sportsplus_models::UserRole;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Lets the request through only when the caller's stored role is `admin`.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/classes", get(get_all_classes))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    let role = UserService::find_role_by_email(&state.db, auth_user.email()).await?;
    check_admin(role)?;

    parts.extensions.insert(auth_user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// A missing user is treated the same as a non-admin.
pub fn check_admin(role: Option<UserRole>) -> Result<(), AppError> {
    match role {
        Some(UserRole::Admin) => Ok(()),
        _ => Err(AppError::forbidden("forbidden message".to_string())),
    }
}
