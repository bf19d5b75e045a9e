use anyhow::Result;
use async_trait::async_trait;

use super::extended_user_entity::ExtendedUserEntity;

#[async_trait]
pub trait ExtendedUserApiRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ExtendedUserEntity>>;
    async fn find(&self, id: i64) -> Result<Option<ExtendedUserEntity>>;
    async fn insert(&self, profile: &ExtendedUserEntity) -> Result<i64>;
    async fn update(&self, profile: &ExtendedUserEntity) -> Result<()>;
}
