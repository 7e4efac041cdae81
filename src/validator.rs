//! Request extractors that turn axum rejections and validator failures into
//! [`AppError`] responses.
//!
//! - malformed JSON, path or query values → 400
//! - well-formed input failing `Validate` rules → 422

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use sportsplus_core::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        value.validate().map_err(|errors| AppError::validation(&errors))?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if error_msg.contains("unknown variant") {
        return AppError::bad_request(anyhow!("Unrecognized enum value in request"));
    }

    if error_msg.contains("invalid type") || error_msg.contains("UUID") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

/// Path extractor whose rejection (bad id, unknown role or status) is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(anyhow!("Invalid path parameter: {}", rejection.body_text()))
            })?;

        Ok(ValidatedPath(value))
    }
}

/// Query-string extractor whose rejection is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::bad_request(anyhow!("Invalid query string: {}", rejection.body_text()))
            })?;

        Ok(ValidatedQuery(value))
    }
}
