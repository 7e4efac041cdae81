use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use sportsplus_core::{AppError, ErrorResponse};
use sportsplus_models::{
    CheckoutOutcome, CreatePaymentDto, Payment, PaymentFilterParams, PaymentIntentRequest,
    PaymentIntentResponse,
};

use crate::middleware::auth::AuthUser;
use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// Create a card payment intent for the given price
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = PaymentIntentRequest,
    responses(
        (status = 200, description = "Intent created", body = PaymentIntentResponse),
        (status = 400, description = "Price is not positive", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 502, description = "Payment gateway failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state, _auth_user))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let response = PaymentService::create_intent(state.payment_gateway.as_ref(), dto.price).await?;
    Ok(Json(response))
}

/// Record a completed payment and remove the purchased cart item
#[utoipa::path(
    post,
    path = "/payments",
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = CheckoutOutcome),
        (status = 200, description = "Transaction already recorded", body = CheckoutOutcome),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Paying for another identity", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state, auth_user))]
pub async fn record_payment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePaymentDto>,
) -> Result<(StatusCode, Json<CheckoutOutcome>), AppError> {
    auth_user.ensure_owns(&dto.email)?;

    let outcome = PaymentService::checkout(&state.db, dto).await?;
    let status = match outcome {
        CheckoutOutcome::Recorded(_) => StatusCode::CREATED,
        CheckoutOutcome::AlreadyEnrolled(_) => StatusCode::OK,
    };
    Ok((status, Json(outcome)))
}

/// The caller's payment history, newest first. Without `?email=` the list is empty.
#[utoipa::path(
    get,
    path = "/payments",
    params(PaymentFilterParams),
    responses(
        (status = 200, description = "Payments", body = Vec<Payment>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Email does not match the token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_payments(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(filters): ValidatedQuery<PaymentFilterParams>,
) -> Result<Json<Vec<Payment>>, AppError> {
    let Some(email) = filters.email else {
        return Ok(Json(Vec::new()));
    };
    auth_user.ensure_owns(&email)?;

    let payments = PaymentService::list_for_email(&state.db, &email).await?;
    Ok(Json(payments))
}
