//! Payment records, checkout DTOs and payment-intent shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::{CartItemId, ClassId, PaymentId};
use crate::results::{DeleteResult, InsertResult, MessageResponse};
use crate::validation::valid_price;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Payment {
    pub id: PaymentId,
    /// Client-supplied idempotency key, usually the gateway transaction id
    pub transaction_id: String,
    pub email: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub class_id: ClassId,
    pub cart_item_id: CartItemId,
    pub class_name: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentDto {
    #[serde(alias = "id", alias = "transactionId")]
    #[validate(length(min = 1, max = 255, message = "transaction_id must not be empty"))]
    pub transaction_id: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[schema(value_type = f64)]
    #[validate(custom(function = "valid_price"))]
    pub price: Decimal,
    #[serde(alias = "classId")]
    pub class_id: ClassId,
    #[serde(alias = "cartItemId")]
    pub cart_item_id: CartItemId,
    #[serde(default, alias = "className")]
    pub class_name: Option<String>,
    /// Defaults to the time the payment is recorded
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PaymentFilterParams {
    /// Must match the caller's token email
    pub email: Option<String>,
}

/// Price in major currency units. Positivity is checked when converting to
/// minor units.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PaymentIntentRequest {
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub insert_result: InsertResult,
    pub delete_result: DeleteResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CheckoutOutcome {
    Recorded(CheckoutResponse),
    AlreadyEnrolled(MessageResponse),
}
