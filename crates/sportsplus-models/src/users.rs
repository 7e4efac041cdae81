//! User records, roles and signup DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::UserId;
use crate::results::{InsertResult, MessageResponse};

/// Role stored on a user record. New users start as `Unset`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Unset,
    Admin,
    Instructor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Admin => "admin",
            Self::Instructor => "instructor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unset" => Ok(Self::Unset),
            "admin" => Ok(Self::Admin),
            "instructor" => Ok(Self::Instructor),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub photo_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Signup payload. Role is never client-supplied.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, alias = "photo", alias = "photoURL")]
    #[validate(length(max = 2048))]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SignupOutcome {
    Created(InsertResult),
    Exists(MessageResponse),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct AdminCheckResponse {
    pub admin: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct InstructorCheckResponse {
    pub instructor: bool,
}
