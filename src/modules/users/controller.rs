use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use sportsplus_core::{AppError, ErrorResponse};
use sportsplus_models::{
    AdminCheckResponse, CreateUserDto, InstructorCheckResponse, SignupOutcome, UpdateResult,
    User, UserId, UserRole,
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

/// List every user (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list_users(&state.db).await?;
    Ok(Json(users))
}

/// Register a user on first sign-in
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = SignupOutcome),
        (status = 200, description = "User already exists", body = SignupOutcome),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<SignupOutcome>), AppError> {
    let outcome = UserService::create_user(&state.db, dto).await?;
    let status = match outcome {
        SignupOutcome::Created(_) => StatusCode::CREATED,
        SignupOutcome::Exists(_) => StatusCode::OK,
    };
    Ok((status, Json(outcome)))
}

/// Whether `email` belongs to an admin. Only answers for the caller's own email.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(("email" = String, Path, description = "Email to check")),
    responses(
        (status = 200, description = "Admin flag", body = AdminCheckResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedPath(email): ValidatedPath<String>,
) -> Result<Json<AdminCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(AdminCheckResponse { admin: false }));
    }

    let admin = UserService::has_role(&state.db, &email, UserRole::Admin).await?;
    Ok(Json(AdminCheckResponse { admin }))
}

/// Whether `email` belongs to an instructor. Only answers for the caller's own email.
#[utoipa::path(
    get,
    path = "/users/instructor/{email}",
    params(("email" = String, Path, description = "Email to check")),
    responses(
        (status = 200, description = "Instructor flag", body = InstructorCheckResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn check_instructor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedPath(email): ValidatedPath<String>,
) -> Result<Json<InstructorCheckResponse>, AppError> {
    if auth_user.email() != email {
        return Ok(Json(InstructorCheckResponse { instructor: false }));
    }

    let instructor = UserService::has_role(&state.db, &email, UserRole::Instructor).await?;
    Ok(Json(InstructorCheckResponse { instructor }))
}

#[utoipa::path(
    get,
    path = "/allUsers/{role}",
    params(("role" = UserRole, Path, description = "unset, admin or instructor")),
    responses(
        (status = 200, description = "Users with the role", body = Vec<User>),
        (status = 400, description = "Unknown role", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users_by_role(
    State(state): State<AppState>,
    ValidatedPath(role): ValidatedPath<UserRole>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list_users_by_role(&state.db, role).await?;
    Ok(Json(users))
}

#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(("id" = UserId, Path, description = "User ID")),
    responses(
        (status = 200, description = "Role updated", body = UpdateResult),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn make_admin(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<UserId>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = UserService::set_role(&state.db, id, UserRole::Admin).await?;
    Ok(Json(result))
}

#[utoipa::path(
    patch,
    path = "/users/instructor/{id}",
    params(("id" = UserId, Path, description = "User ID")),
    responses(
        (status = 200, description = "Role updated", body = UpdateResult),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn make_instructor(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<UserId>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = UserService::set_role(&state.db, id, UserRole::Instructor).await?;
    Ok(Json(result))
}
