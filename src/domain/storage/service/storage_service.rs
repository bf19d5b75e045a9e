use anyhow::Result;
use sqlx::SqlitePool;
use validator::Validate;

use crate::core::persistence::storage::storage_api_repository_trait::StorageApiRepository;
use crate::core::persistence::storage::storage_entity::StorageEntity;
use crate::core::persistence::storage::storage_repository::StorageRepository;
use crate::domain::storage::dto::storage_create_request::StorageCreateRequest;
use crate::errors::AppError;

pub async fn list_storages(pool: &SqlitePool) -> Result<Vec<StorageEntity>> {
    let repo = StorageRepository::new(pool.clone());
    repo.list().await
}

pub async fn create_storage(pool: &SqlitePool, req: StorageCreateRequest) -> Result<StorageEntity> {
    let repo = StorageRepository::new(pool.clone());
    create_with_repo(&repo, req).await
}

async fn create_with_repo<R: StorageApiRepository>(
    repo: &R,
    req: StorageCreateRequest,
) -> Result<StorageEntity> {
    req.validate().map_err(AppError::Validation)?;

    let mut storage = StorageEntity {
        id: 0,
        extended_user_id: req.extended_user_id,
        name: req.name,
        location: req.location,
        capacity_tons: req.capacity_tons.unwrap_or(0.0),
        price_per_ton: req.price_per_ton.unwrap_or(0.0),
        storage_type: req.storage_type.unwrap_or_default(),
        is_available: req.is_available.unwrap_or(true),
    };

    storage.id = repo.insert(&storage).await?;
    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockStorageRepository {
        rows: Mutex<Vec<StorageEntity>>,
    }

    #[async_trait]
    impl StorageApiRepository for MockStorageRepository {
        async fn list(&self) -> Result<Vec<StorageEntity>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert(&self, storage: &StorageEntity) -> Result<i64> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let mut stored = storage.clone();
            stored.id = id;
            rows.push(stored);
            Ok(id)
        }
    }

    #[tokio::test]
    async fn create_returns_representation() {
        let repo = MockStorageRepository::default();

        let storage = create_with_repo(
            &repo,
            StorageCreateRequest {
                extended_user_id: 1,
                name: "Cold Store A".into(),
                location: "Pune".into(),
                capacity_tons: Some(500.0),
                price_per_ton: Some(90.0),
                storage_type: Some("cold".into()),
                is_available: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(storage.id, 1);
        assert!(storage.is_available);
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_name_fails_validation() {
        let repo = MockStorageRepository::default();

        let err = create_with_repo(
            &repo,
            StorageCreateRequest {
                extended_user_id: 1,
                name: "".into(),
                location: "Pune".into(),
                capacity_tons: None,
                price_per_ton: None,
                storage_type: None,
                is_available: None,
            },
        )
        .await
        .expect_err("blank name");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Validation(_))
        ));
    }
}
