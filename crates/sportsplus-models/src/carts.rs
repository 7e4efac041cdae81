//! Cart items: classes a student selected but has not paid for yet.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::{CartItemId, ClassId};
use crate::validation::valid_price;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CartItem {
    pub id: CartItemId,
    /// Owning student
    pub email: String,
    pub class_id: ClassId,
    pub class_name: Option<String>,
    pub image: Option<String>,
    pub instructor_name: Option<String>,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCartItemDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(alias = "classId")]
    pub class_id: ClassId,
    #[serde(default, alias = "className", alias = "name")]
    pub class_name: Option<String>,
    pub image: Option<String>,
    #[serde(default, alias = "instructorName")]
    pub instructor_name: Option<String>,
    #[schema(value_type = f64)]
    #[validate(custom(function = "valid_price"))]
    pub price: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CartFilterParams {
    /// Must match the caller's token email
    pub email: Option<String>,
}
