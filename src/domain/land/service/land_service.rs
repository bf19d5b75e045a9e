use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::debug;
use validator::Validate;

use crate::core::persistence::land::land_api_repository_trait::LandApiRepository;
use crate::core::persistence::land::land_entity::LandEntity;
use crate::core::persistence::land::land_repository::LandRepository;
use crate::domain::land::dto::land_create_request::LandCreateRequest;
use crate::domain::land::dto::land_patch_request::LandPatchRequest;
use crate::errors::AppError;

pub async fn list_lands(pool: &SqlitePool, owner_id: Option<i64>) -> Result<Vec<LandEntity>> {
    let repo = LandRepository::new(pool.clone());
    list_with_repo(&repo, owner_id).await
}

pub async fn get_land(pool: &SqlitePool, id: i64) -> Result<LandEntity> {
    let repo = LandRepository::new(pool.clone());
    get_with_repo(&repo, id).await
}

pub async fn create_land(pool: &SqlitePool, req: LandCreateRequest) -> Result<LandEntity> {
    let repo = LandRepository::new(pool.clone());
    create_with_repo(&repo, req).await
}

pub async fn patch_land(pool: &SqlitePool, id: i64, req: LandPatchRequest) -> Result<LandEntity> {
    let repo = LandRepository::new(pool.clone());
    patch_with_repo(&repo, id, req).await
}

pub async fn delete_land(pool: &SqlitePool, id: i64) -> Result<Value> {
    let repo = LandRepository::new(pool.clone());
    delete_with_repo(&repo, id).await
}

async fn list_with_repo<R: LandApiRepository>(
    repo: &R,
    owner_id: Option<i64>,
) -> Result<Vec<LandEntity>> {
    let lands = repo.list().await?;
    Ok(match owner_id {
        Some(owner) => lands
            .into_iter()
            .filter(|l| l.extended_user_id == owner)
            .collect(),
        None => lands,
    })
}

async fn get_with_repo<R: LandApiRepository>(repo: &R, id: i64) -> Result<LandEntity> {
    repo.find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Land {id} not found")).into())
}

async fn create_with_repo<R: LandApiRepository>(
    repo: &R,
    req: LandCreateRequest,
) -> Result<LandEntity> {
    req.validate().map_err(AppError::Validation)?;

    let mut land = LandEntity {
        id: 0,
        extended_user_id: req.extended_user_id,
        title: req.title,
        location: req.location,
        area_acres: req.area_acres,
        soil_type: req.soil_type.unwrap_or_default(),
        water_source: req.water_source.unwrap_or_default(),
        expected_rent: req.expected_rent.unwrap_or(0.0),
        description: req.description.unwrap_or_default(),
        is_available: req.is_available.unwrap_or(true),
        created_at: Utc::now(),
    };

    land.id = repo.insert(&land).await?;
    debug!("Listed land '{}' as #{}", land.title, land.id);

    Ok(land)
}

async fn patch_with_repo<R: LandApiRepository>(
    repo: &R,
    id: i64,
    req: LandPatchRequest,
) -> Result<LandEntity> {
    req.validate().map_err(AppError::Validation)?;

    let mut land = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Land {id} not found")))?;

    land.apply_update(req);
    repo.update(&land).await?;

    Ok(land)
}

async fn delete_with_repo<R: LandApiRepository>(repo: &R, id: i64) -> Result<Value> {
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("Land {id} not found")).into());
    }
    Ok(json!({ "message": "Land deleted successfully" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockLandRepository {
        rows: Mutex<Vec<LandEntity>>,
    }

    #[async_trait]
    impl LandApiRepository for MockLandRepository {
        async fn list(&self) -> Result<Vec<LandEntity>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find(&self, id: i64) -> Result<Option<LandEntity>> {
            Ok(self.rows.lock().unwrap().iter().find(|l| l.id == id).cloned())
        }

        async fn insert(&self, land: &LandEntity) -> Result<i64> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let mut stored = land.clone();
            stored.id = id;
            rows.push(stored);
            Ok(id)
        }

        async fn update(&self, land: &LandEntity) -> Result<()> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(slot) = rows.iter_mut().find(|l| l.id == land.id) {
                *slot = land.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<bool> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|l| l.id != id);
            Ok(rows.len() < before)
        }
    }

    fn listing(owner: i64, title: &str) -> LandCreateRequest {
        LandCreateRequest {
            extended_user_id: owner,
            title: title.into(),
            location: "Nashik, MH".into(),
            area_acres: 3.5,
            soil_type: Some("black".into()),
            water_source: Some("borewell".into()),
            expected_rent: Some(12000.0),
            description: None,
            is_available: None,
        }
    }

    #[tokio::test]
    async fn create_defaults_availability() {
        let repo = MockLandRepository::default();

        let land = create_with_repo(&repo, listing(1, "River plot")).await.unwrap();

        assert!(land.is_available);
        assert_eq!(land.id, 1);
    }

    #[tokio::test]
    async fn listing_twice_is_idempotent() {
        let repo = MockLandRepository::default();
        create_with_repo(&repo, listing(1, "River plot")).await.unwrap();
        create_with_repo(&repo, listing(2, "Hill plot")).await.unwrap();

        let first = list_with_repo(&repo, None).await.unwrap();
        let second = list_with_repo(&repo, None).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(
            first.iter().map(|l| l.id).collect::<Vec<_>>(),
            second.iter().map(|l| l.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn owner_filter_limits_rows() {
        let repo = MockLandRepository::default();
        create_with_repo(&repo, listing(1, "River plot")).await.unwrap();
        create_with_repo(&repo, listing(2, "Hill plot")).await.unwrap();

        let scoped = list_with_repo(&repo, Some(1)).await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].title, "River plot");
    }

    #[tokio::test]
    async fn delete_missing_land_is_not_found() {
        let repo = MockLandRepository::default();

        let err = delete_with_repo(&repo, 404).await.expect_err("no such land");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn zero_area_is_rejected() {
        let repo = MockLandRepository::default();
        let mut req = listing(1, "Dot plot");
        req.area_acres = 0.0;

        let err = create_with_repo(&repo, req).await.expect_err("zero area");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Validation(_))
        ));
    }
}
