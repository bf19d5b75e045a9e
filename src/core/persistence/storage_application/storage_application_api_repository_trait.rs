use anyhow::Result;
use async_trait::async_trait;

use super::storage_application_entity::StorageApplicationEntity;

#[async_trait]
pub trait StorageApplicationApiRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<StorageApplicationEntity>>;
    async fn find(&self, id: i64) -> Result<Option<StorageApplicationEntity>>;
    async fn insert(&self, application: &StorageApplicationEntity) -> Result<i64>;
    async fn delete(&self, id: i64) -> Result<bool>;
}
