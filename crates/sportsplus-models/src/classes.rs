//! Class listings, status lifecycle and instructor DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::ids::ClassId;
use crate::validation::valid_price;

/// Review state of a class listing. Any transition is allowed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "class_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub id: ClassId,
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: Option<String>,
    /// Owning instructor
    pub email: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Remaining capacity
    pub seats: i32,
    /// Enrolled count
    pub student: i32,
    pub status: ClassStatus,
    pub feedback: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(max = 2048))]
    pub image: Option<String>,
    #[serde(alias = "instructorName")]
    pub instructor_name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[schema(value_type = f64)]
    #[validate(custom(function = "valid_price"))]
    pub price: Decimal,
    #[validate(range(min = 0, message = "seats must not be negative"))]
    pub seats: i32,
    /// Defaults to `pending`
    pub status: Option<ClassStatus>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FeedbackDto {
    #[validate(length(min = 1, max = 2000, message = "feedback must not be empty"))]
    pub feedback: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct StatusUpdateParams {
    pub status: ClassStatus,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ClassFilterParams {
    /// Owning instructor email
    pub email: Option<String>,
}
