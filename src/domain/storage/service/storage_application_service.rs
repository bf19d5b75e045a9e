use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::debug;
use validator::Validate;

use crate::core::persistence::storage_application::storage_application_api_repository_trait::StorageApplicationApiRepository;
use crate::core::persistence::storage_application::storage_application_entity::StorageApplicationEntity;
use crate::core::persistence::storage_application::storage_application_repository::StorageApplicationRepository;
use crate::domain::storage::dto::storage_application_create_request::StorageApplicationCreateRequest;
use crate::errors::AppError;

pub async fn list_storage_applications(
    pool: &SqlitePool,
) -> Result<Vec<StorageApplicationEntity>> {
    let repo = StorageApplicationRepository::new(pool.clone());
    repo.list().await
}

pub async fn create_storage_application(
    pool: &SqlitePool,
    req: StorageApplicationCreateRequest,
) -> Result<Value> {
    let repo = StorageApplicationRepository::new(pool.clone());
    create_with_repo(&repo, req).await
}

pub async fn delete_storage_application(pool: &SqlitePool, id: i64) -> Result<Value> {
    let repo = StorageApplicationRepository::new(pool.clone());
    delete_with_repo(&repo, id).await
}

async fn create_with_repo<R: StorageApplicationApiRepository>(
    repo: &R,
    req: StorageApplicationCreateRequest,
) -> Result<Value> {
    req.validate().map_err(AppError::Validation)?;

    let application = StorageApplicationEntity {
        id: 0,
        storage_id: req.storage_id,
        farmer_id: req.farmer_id,
        crop_type: req.crop_type.unwrap_or_default(),
        quantity_tons: req.quantity_tons.unwrap_or(0.0),
        duration_months: req.duration_months.unwrap_or(0),
        status: "pending".into(),
        applied_at: Utc::now(),
    };

    let id = repo.insert(&application).await?;
    debug!(
        "Farmer #{} applied for storage #{} (application #{id})",
        application.farmer_id, application.storage_id
    );

    Ok(json!({ "message": "Application submitted successfully", "id": id }))
}

async fn delete_with_repo<R: StorageApplicationApiRepository>(repo: &R, id: i64) -> Result<Value> {
    if !repo.delete(id).await? {
        return Err(AppError::NotFound("Application not found".into()).into());
    }
    Ok(json!({ "message": "Application deleted successfully" }))
}
