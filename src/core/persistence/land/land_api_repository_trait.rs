use anyhow::Result;
use async_trait::async_trait;

use super::land_entity::LandEntity;

#[async_trait]
pub trait LandApiRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<LandEntity>>;
    async fn find(&self, id: i64) -> Result<Option<LandEntity>>;
    async fn insert(&self, land: &LandEntity) -> Result<i64>;
    async fn update(&self, land: &LandEntity) -> Result<()>;
    /// Returns false when no row matched the id.
    async fn delete(&self, id: i64) -> Result<bool>;
}
