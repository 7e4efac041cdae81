use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use sportsplus_core::{AppError, ErrorResponse};
use sportsplus_models::{
    CartFilterParams, CartItem, CartItemId, CreateCartItemDto, DeleteResult, InsertResult,
};

use crate::middleware::auth::AuthUser;
use crate::modules::carts::service::CartService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    post,
    path = "/selectClass",
    request_body = CreateCartItemDto,
    responses(
        (status = 201, description = "Class added to cart", body = InsertResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Cart"
)]
#[instrument(skip(state))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCartItemDto>,
) -> Result<(StatusCode, Json<InsertResult>), AppError> {
    let result = CartService::add_item(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// The caller's cart. Without `?email=` the list is empty.
#[utoipa::path(
    get,
    path = "/selectClass",
    params(CartFilterParams),
    responses(
        (status = 200, description = "Cart items", body = Vec<CartItem>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email does not match the token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_cart(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(filters): ValidatedQuery<CartFilterParams>,
) -> Result<Json<Vec<CartItem>>, AppError> {
    let Some(email) = filters.email else {
        return Ok(Json(Vec::new()));
    };
    auth_user.ensure_owns(&email)?;

    let items = CartService::list_for_email(&state.db, &email).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/selectClass/{id}",
    params(("id" = CartItemId, Path, description = "Cart item ID")),
    responses(
        (status = 200, description = "Cart item", body = CartItem),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Cart item not found", body = ErrorResponse)
    ),
    tag = "Cart"
)]
#[instrument(skip(state))]
pub async fn get_cart_item(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<CartItemId>,
) -> Result<Json<CartItem>, AppError> {
    let item = CartService::get_item(&state.db, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/selectClass/{id}",
    params(("id" = CartItemId, Path, description = "Cart item ID")),
    responses(
        (status = 200, description = "Cart item removed", body = DeleteResult),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Cart item not found", body = ErrorResponse)
    ),
    tag = "Cart"
)]
#[instrument(skip(state))]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<CartItemId>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = CartService::delete_item(&state.db, id).await?;
    Ok(Json(result))
}
