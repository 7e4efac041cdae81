use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use sportsplus_core::{AppError, ErrorResponse};
use sportsplus_models::{
    Class, ClassFilterParams, ClassId, ClassStatus, CreateClassDto, FeedbackDto, InsertResult,
    StatusUpdateParams, UpdateResult,
};

use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    post,
    path = "/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = InsertResult),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn create_class(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<InsertResult>), AppError> {
    let result = ClassService::create_class(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Every class regardless of status (admin only)
#[utoipa::path(
    get,
    path = "/classes",
    responses(
        (status = 200, description = "All classes", body = Vec<Class>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_all_classes(State(state): State<AppState>) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::list_classes(&state.db, None).await?;
    Ok(Json(classes))
}

/// An instructor's own classes
#[utoipa::path(
    get,
    path = "/myclasses",
    params(ClassFilterParams),
    responses(
        (status = 200, description = "Classes owned by the given email", body = Vec<Class>)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_my_classes(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<ClassFilterParams>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::list_classes(&state.db, filters.email.as_deref()).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/allClasses/{status}",
    params(("status" = ClassStatus, Path, description = "pending, approved or denied")),
    responses(
        (status = 200, description = "Classes with the status", body = Vec<Class>),
        (status = 400, description = "Unknown status", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes_by_status(
    State(state): State<AppState>,
    ValidatedPath(status): ValidatedPath<ClassStatus>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::list_by_status(&state.db, status).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    get,
    path = "/popularClass/{status}",
    params(("status" = ClassStatus, Path, description = "pending, approved or denied")),
    responses(
        (status = 200, description = "Classes with the status, most enrolled first", body = Vec<Class>),
        (status = 400, description = "Unknown status", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_popular_classes(
    State(state): State<AppState>,
    ValidatedPath(status): ValidatedPath<ClassStatus>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::list_popular(&state.db, status).await?;
    Ok(Json(classes))
}

#[utoipa::path(
    patch,
    path = "/classes/{id}",
    params(
        ("id" = ClassId, Path, description = "Class ID"),
        StatusUpdateParams
    ),
    responses(
        (status = 200, description = "Status updated", body = UpdateResult),
        (status = 400, description = "Malformed id or unknown status", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn update_class_status(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<ClassId>,
    ValidatedQuery(params): ValidatedQuery<StatusUpdateParams>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = ClassService::update_status(&state.db, id, params.status).await?;
    Ok(Json(result))
}

/// Append reviewer feedback to a class
#[utoipa::path(
    put,
    path = "/addClasses/{id}",
    params(("id" = ClassId, Path, description = "Class ID")),
    request_body = FeedbackDto,
    responses(
        (status = 200, description = "Feedback appended", body = UpdateResult),
        (status = 404, description = "Class not found", body = ErrorResponse),
        (status = 422, description = "Empty feedback", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn add_feedback(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<ClassId>,
    ValidatedJson(dto): ValidatedJson<FeedbackDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = ClassService::add_feedback(&state.db, id, &dto.feedback).await?;
    Ok(Json(result))
}

/// Take one seat in a class after a successful payment
#[utoipa::path(
    patch,
    path = "/all-classes/seats/{id}",
    params(("id" = ClassId, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Seat taken", body = UpdateResult),
        (status = 404, description = "Class not found", body = ErrorResponse),
        (status = 409, description = "No seats left", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn enroll_seat(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<ClassId>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = ClassService::enroll(&state.db, id).await?;
    Ok(Json(result))
}
