use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::debug;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::persistence::land_application::land_application_api_repository_trait::LandApplicationApiRepository;
use crate::core::persistence::land_application::land_application_entity::{
    LandApplicationEntity, APPLICATION_STATUSES,
};
use crate::core::persistence::land_application::land_application_repository::LandApplicationRepository;
use crate::domain::lease::dto::land_application_create_request::LandApplicationCreateRequest;
use crate::domain::lease::dto::land_application_patch_request::LandApplicationPatchRequest;
use crate::domain::lease::dto::land_application_status_request::LandApplicationStatusRequest;
use crate::errors::AppError;

pub async fn list_land_applications(
    pool: &SqlitePool,
    land_id: Option<i64>,
    farmer_id: Option<i64>,
) -> Result<Vec<LandApplicationEntity>> {
    let repo = LandApplicationRepository::new(pool.clone());
    list_with_repo(&repo, land_id, farmer_id).await
}

pub async fn get_land_application(pool: &SqlitePool, id: i64) -> Result<LandApplicationEntity> {
    let repo = LandApplicationRepository::new(pool.clone());
    get_with_repo(&repo, id).await
}

pub async fn create_land_application(
    pool: &SqlitePool,
    req: LandApplicationCreateRequest,
) -> Result<LandApplicationEntity> {
    let repo = LandApplicationRepository::new(pool.clone());
    create_with_repo(&repo, req).await
}

pub async fn patch_land_application(
    pool: &SqlitePool,
    id: i64,
    req: LandApplicationPatchRequest,
) -> Result<LandApplicationEntity> {
    let repo = LandApplicationRepository::new(pool.clone());
    patch_with_repo(&repo, id, req).await
}

pub async fn update_land_application_status(
    pool: &SqlitePool,
    id: i64,
    req: LandApplicationStatusRequest,
) -> Result<LandApplicationEntity> {
    let repo = LandApplicationRepository::new(pool.clone());
    update_status_with_repo(&repo, id, req).await
}

pub async fn delete_land_application(pool: &SqlitePool, id: i64) -> Result<Value> {
    let repo = LandApplicationRepository::new(pool.clone());
    delete_with_repo(&repo, id).await
}

async fn list_with_repo<R: LandApplicationApiRepository>(
    repo: &R,
    land_id: Option<i64>,
    farmer_id: Option<i64>,
) -> Result<Vec<LandApplicationEntity>> {
    let applications = repo.list().await?;
    Ok(applications
        .into_iter()
        .filter(|a| land_id.map_or(true, |id| a.land_id == id))
        .filter(|a| farmer_id.map_or(true, |id| a.farmer_id == id))
        .collect())
}

async fn get_with_repo<R: LandApplicationApiRepository>(
    repo: &R,
    id: i64,
) -> Result<LandApplicationEntity> {
    repo.find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")).into())
}

async fn create_with_repo<R: LandApplicationApiRepository>(
    repo: &R,
    req: LandApplicationCreateRequest,
) -> Result<LandApplicationEntity> {
    req.validate().map_err(AppError::Validation)?;

    let mut application = LandApplicationEntity {
        id: 0,
        land_id: req.land_id,
        farmer_id: req.farmer_id,
        proposed_rent: req.proposed_rent.unwrap_or(0.0),
        duration_months: req.duration_months.unwrap_or(0),
        message: req.message.unwrap_or_default(),
        status: "pending".into(),
        applied_at: Utc::now(),
    };

    application.id = repo.insert(&application).await?;
    debug!(
        "Farmer #{} applied for land #{} (application #{})",
        application.farmer_id, application.land_id, application.id
    );

    Ok(application)
}

async fn patch_with_repo<R: LandApplicationApiRepository>(
    repo: &R,
    id: i64,
    req: LandApplicationPatchRequest,
) -> Result<LandApplicationEntity> {
    req.validate().map_err(AppError::Validation)?;
    if let Some(status) = &req.status {
        check_status(status)?;
    }

    let mut application = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    application.apply_update(req);
    repo.update(&application).await?;

    Ok(application)
}

async fn update_status_with_repo<R: LandApplicationApiRepository>(
    repo: &R,
    id: i64,
    req: LandApplicationStatusRequest,
) -> Result<LandApplicationEntity> {
    req.validate().map_err(AppError::Validation)?;
    check_status(&req.status)?;

    let mut application = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    application.status = req.status;
    repo.update(&application).await?;
    debug!("Application #{} is now {}", application.id, application.status);

    Ok(application)
}

async fn delete_with_repo<R: LandApplicationApiRepository>(repo: &R, id: i64) -> Result<Value> {
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("Application {id} not found")).into());
    }
    Ok(json!({ "message": "Application deleted successfully" }))
}

fn check_status(status: &str) -> Result<(), AppError> {
    if APPLICATION_STATUSES.contains(&status) {
        return Ok(());
    }
    let mut errors = ValidationErrors::new();
    let mut err = ValidationError::new("invalid_status");
    err.message = Some("Status must be pending, approved or rejected.".into());
    errors.add("status", err);
    Err(AppError::Validation(errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockLandApplicationRepository {
        rows: Mutex<Vec<LandApplicationEntity>>,
    }

    #[async_trait]
    impl LandApplicationApiRepository for MockLandApplicationRepository {
        async fn list(&self) -> Result<Vec<LandApplicationEntity>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find(&self, id: i64) -> Result<Option<LandApplicationEntity>> {
            Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
        }

        async fn insert(&self, application: &LandApplicationEntity) -> Result<i64> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let mut stored = application.clone();
            stored.id = id;
            rows.push(stored);
            Ok(id)
        }

        async fn update(&self, application: &LandApplicationEntity) -> Result<()> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(slot) = rows.iter_mut().find(|a| a.id == application.id) {
                *slot = application.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<bool> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| a.id != id);
            Ok(rows.len() < before)
        }
    }

    fn application(land_id: i64, farmer_id: i64) -> LandApplicationCreateRequest {
        LandApplicationCreateRequest {
            land_id,
            farmer_id,
            proposed_rent: Some(9000.0),
            duration_months: Some(12),
            message: Some("Interested in the kharif season.".into()),
        }
    }

    #[tokio::test]
    async fn new_applications_start_pending() {
        let repo = MockLandApplicationRepository::default();

        let created = create_with_repo(&repo, application(1, 2)).await.unwrap();

        assert_eq!(created.status, "pending");
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn status_update_changes_only_status() {
        let repo = MockLandApplicationRepository::default();
        let created = create_with_repo(&repo, application(1, 2)).await.unwrap();

        let updated = update_status_with_repo(
            &repo,
            created.id,
            LandApplicationStatusRequest {
                status: "approved".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.status, "approved");
        assert_eq!(updated.proposed_rent, created.proposed_rent);
        assert_eq!(updated.duration_months, created.duration_months);
        assert_eq!(updated.message, created.message);
        assert_eq!(updated.applied_at, created.applied_at);
    }

    #[tokio::test]
    async fn unknown_status_is_a_field_error() {
        let repo = MockLandApplicationRepository::default();
        let created = create_with_repo(&repo, application(1, 2)).await.unwrap();

        let err = update_status_with_repo(
            &repo,
            created.id,
            LandApplicationStatusRequest {
                status: "maybe".into(),
            },
        )
        .await
        .expect_err("bad status");

        match err.downcast_ref::<AppError>() {
            Some(AppError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("status"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_filters_by_land_and_farmer() {
        let repo = MockLandApplicationRepository::default();
        create_with_repo(&repo, application(1, 2)).await.unwrap();
        create_with_repo(&repo, application(1, 3)).await.unwrap();
        create_with_repo(&repo, application(2, 2)).await.unwrap();

        assert_eq!(list_with_repo(&repo, None, None).await.unwrap().len(), 3);
        assert_eq!(list_with_repo(&repo, Some(1), None).await.unwrap().len(), 2);
        assert_eq!(list_with_repo(&repo, Some(1), Some(2)).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_guards_missing_rows() {
        let repo = MockLandApplicationRepository::default();
        let created = create_with_repo(&repo, application(1, 2)).await.unwrap();

        delete_with_repo(&repo, created.id).await.unwrap();

        let err = delete_with_repo(&repo, created.id).await.expect_err("gone");
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotFound(_))
        ));
    }
}
