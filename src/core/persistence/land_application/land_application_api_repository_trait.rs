use anyhow::Result;
use async_trait::async_trait;

use super::land_application_entity::LandApplicationEntity;

#[async_trait]
pub trait LandApplicationApiRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<LandApplicationEntity>>;
    async fn find(&self, id: i64) -> Result<Option<LandApplicationEntity>>;
    async fn insert(&self, application: &LandApplicationEntity) -> Result<i64>;
    async fn update(&self, application: &LandApplicationEntity) -> Result<()>;
    async fn delete(&self, id: i64) -> Result<bool>;
}
