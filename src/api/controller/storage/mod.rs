use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_created, to_json};
use crate::app_state::AppState;
use crate::core::persistence::storage::storage_entity::StorageEntity;
use crate::core::persistence::storage_application::storage_application_entity::StorageApplicationEntity;
use crate::domain::storage::dto::storage_application_create_request::StorageApplicationCreateRequest;
use crate::domain::storage::dto::storage_create_request::StorageCreateRequest;
use crate::errors::AppError;

pub struct StorageController;
pub struct StorageApplicationController;

impl StorageController {
    pub async fn list(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<StorageEntity>>>, AppError> {
        to_json(state.storage_service.list_storages().await)
    }

    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<StorageCreateRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<StorageEntity>>), AppError> {
        to_created(state.storage_service.create_storage(payload).await)
    }
}

impl StorageApplicationController {
    pub async fn list(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<StorageApplicationEntity>>>, AppError> {
        to_json(state.storage_service.list_storage_applications().await)
    }

    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<StorageApplicationCreateRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
        to_created(state.storage_service.create_storage_application(payload).await)
    }

    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.storage_service.delete_storage_application(id).await)
    }
}
