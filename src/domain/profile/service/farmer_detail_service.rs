use anyhow::Result;
use sqlx::SqlitePool;
use validator::Validate;

use crate::core::persistence::farmer_detail::farmer_detail_api_repository_trait::FarmerDetailApiRepository;
use crate::core::persistence::farmer_detail::farmer_detail_entity::FarmerDetailEntity;
use crate::core::persistence::farmer_detail::farmer_detail_repository::FarmerDetailRepository;
use crate::domain::profile::dto::farmer_detail_create_request::FarmerDetailCreateRequest;
use crate::domain::profile::dto::farmer_detail_patch_request::FarmerDetailPatchRequest;
use crate::errors::AppError;

pub async fn list_farmer_details(
    pool: &SqlitePool,
    extended_user_id: Option<i64>,
) -> Result<Vec<FarmerDetailEntity>> {
    let repo = FarmerDetailRepository::new(pool.clone());
    list_with_repo(&repo, extended_user_id).await
}

pub async fn get_farmer_detail(pool: &SqlitePool, id: i64) -> Result<FarmerDetailEntity> {
    let repo = FarmerDetailRepository::new(pool.clone());
    get_with_repo(&repo, id).await
}

pub async fn create_farmer_detail(
    pool: &SqlitePool,
    req: FarmerDetailCreateRequest,
) -> Result<FarmerDetailEntity> {
    let repo = FarmerDetailRepository::new(pool.clone());
    create_with_repo(&repo, req).await
}

pub async fn patch_farmer_detail(
    pool: &SqlitePool,
    id: i64,
    req: FarmerDetailPatchRequest,
) -> Result<FarmerDetailEntity> {
    let repo = FarmerDetailRepository::new(pool.clone());
    patch_with_repo(&repo, id, req).await
}

async fn list_with_repo<R: FarmerDetailApiRepository>(
    repo: &R,
    extended_user_id: Option<i64>,
) -> Result<Vec<FarmerDetailEntity>> {
    let details = repo.list().await?;
    Ok(match extended_user_id {
        Some(owner) => details
            .into_iter()
            .filter(|d| d.extended_user_id == owner)
            .collect(),
        None => details,
    })
}

async fn get_with_repo<R: FarmerDetailApiRepository>(
    repo: &R,
    id: i64,
) -> Result<FarmerDetailEntity> {
    repo.find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Farmer detail {id} not found")).into())
}

async fn create_with_repo<R: FarmerDetailApiRepository>(
    repo: &R,
    req: FarmerDetailCreateRequest,
) -> Result<FarmerDetailEntity> {
    req.validate().map_err(AppError::Validation)?;

    let mut detail = FarmerDetailEntity {
        id: 0,
        extended_user_id: req.extended_user_id,
        farm_size_acres: req.farm_size_acres.unwrap_or(0.0),
        experience_years: req.experience_years.unwrap_or(0),
        preferred_crops: req.preferred_crops.unwrap_or_default(),
    };

    detail.id = repo.insert(&detail).await?;
    Ok(detail)
}

async fn patch_with_repo<R: FarmerDetailApiRepository>(
    repo: &R,
    id: i64,
    req: FarmerDetailPatchRequest,
) -> Result<FarmerDetailEntity> {
    req.validate().map_err(AppError::Validation)?;

    let mut detail = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Farmer detail {id} not found")))?;

    detail.apply_update(req);
    repo.update(&detail).await?;

    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockFarmerDetailRepository {
        rows: Mutex<Vec<FarmerDetailEntity>>,
    }

    #[async_trait]
    impl FarmerDetailApiRepository for MockFarmerDetailRepository {
        async fn list(&self) -> Result<Vec<FarmerDetailEntity>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find(&self, id: i64) -> Result<Option<FarmerDetailEntity>> {
            Ok(self.rows.lock().unwrap().iter().find(|d| d.id == id).cloned())
        }

        async fn insert(&self, detail: &FarmerDetailEntity) -> Result<i64> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let mut stored = detail.clone();
            stored.id = id;
            rows.push(stored);
            Ok(id)
        }

        async fn update(&self, detail: &FarmerDetailEntity) -> Result<()> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(slot) = rows.iter_mut().find(|d| d.id == detail.id) {
                *slot = detail.clone();
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_fills_defaults() {
        let repo = MockFarmerDetailRepository::default();

        let detail = create_with_repo(
            &repo,
            FarmerDetailCreateRequest {
                extended_user_id: 3,
                farm_size_acres: None,
                experience_years: Some(4),
                preferred_crops: Some("rice,wheat".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(detail.id, 1);
        assert_eq!(detail.farm_size_acres, 0.0);
        assert_eq!(detail.experience_years, 4);
    }

    #[tokio::test]
    async fn negative_farm_size_is_rejected() {
        let repo = MockFarmerDetailRepository::default();

        let err = create_with_repo(
            &repo,
            FarmerDetailCreateRequest {
                extended_user_id: 3,
                farm_size_acres: Some(-1.0),
                experience_years: None,
                preferred_crops: None,
            },
        )
        .await
        .expect_err("negative acreage");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Validation(_))
        ));
    }
}
