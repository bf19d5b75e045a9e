use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::user_entity::UserEntity;

/// API-facing repository abstraction for user accounts.
#[async_trait]
pub trait UserApiRepository: Send + Sync {
    async fn find(&self, id: i64) -> Result<Option<UserEntity>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>>;
    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>>;
    async fn insert(&self, user: &UserEntity) -> Result<i64>;
    async fn record_login(&self, id: i64, at: DateTime<Utc>) -> Result<()>;
}
