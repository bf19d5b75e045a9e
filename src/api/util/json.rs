use anyhow::Result;
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::{internal_error, AppError};

pub fn to_json<T: serde::Serialize>(
    result: Result<T>,
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(unwrap_app_error(err)),
    }
}

/// Same as `to_json`, answering 201 for create endpoints.
pub fn to_created<T: serde::Serialize>(
    result: Result<T>,
) -> Result<(StatusCode, Json<ApiResponse<T>>), AppError> {
    match result {
        Ok(value) => Ok((StatusCode::CREATED, Json(ApiResponse::ok(value)))),
        Err(err) => Err(unwrap_app_error(err)),
    }
}

/// Typed errors raised in the domain layer travel through anyhow; recover them
/// so validation/auth/not-found map to their own status codes.
fn unwrap_app_error(err: anyhow::Error) -> AppError {
    err.downcast::<AppError>().unwrap_or_else(internal_error)
}
