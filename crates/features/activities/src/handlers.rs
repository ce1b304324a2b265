use crate::Activities;
use crate::model::{Activity, EmailQuery, MessageResponse};
use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use mhs_derive::api_handler;
use mhs_kernel::domain::constants::ACTIVITIES_TAG;
use mhs_kernel::server::{ApiError, ApiState, ErrorResponse};
use std::collections::BTreeMap;

#[api_handler(
    get,
    path = "/activities",
    responses(
        (status = OK, description = "All activities keyed by name", body = BTreeMap<String, Activity>),
    ),
    tag = ACTIVITIES_TAG,
)]
pub(super) async fn list_activities(
    State(state): State<ApiState>,
) -> Result<Json<BTreeMap<String, Activity>>, ApiError> {
    let activities = state.try_get_slice::<Activities>()?;
    Ok(Json(activities.registry.list()))
}

#[api_handler(
    post,
    path = "/activities/{activity_name}/signup",
    params(
        ("activity_name" = String, Path, description = "Activity name, percent-encoded"),
        ("email" = String, Query, description = "Student email"),
    ),
    responses(
        (status = OK, description = "Student signed up", body = MessageResponse),
        (status = BAD_REQUEST, description = "Already signed up, activity full or malformed name", body = ErrorResponse),
        (status = NOT_FOUND, description = "Activity not found", body = ErrorResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Missing email", body = ErrorResponse),
    ),
    tag = ACTIVITIES_TAG,
)]
pub(super) async fn sign_up(
    State(state): State<ApiState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(EmailQuery { email }) = query?;
    let activities = state.try_get_slice::<Activities>()?;

    let message = activities.registry.sign_up(&activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}

#[api_handler(
    delete,
    path = "/activities/{activity_name}/unregister",
    params(
        ("activity_name" = String, Path, description = "Activity name, percent-encoded"),
        ("email" = String, Query, description = "Student email"),
    ),
    responses(
        (status = OK, description = "Student unregistered", body = MessageResponse),
        (status = BAD_REQUEST, description = "Student is not signed up or malformed name", body = ErrorResponse),
        (status = NOT_FOUND, description = "Activity not found", body = ErrorResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Missing email", body = ErrorResponse),
    ),
    tag = ACTIVITIES_TAG,
)]
pub(super) async fn unregister(
    State(state): State<ApiState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(EmailQuery { email }) = query?;
    let activities = state.try_get_slice::<Activities>()?;

    let message = activities.registry.unregister(&activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}
