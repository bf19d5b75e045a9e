use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::session_api_repository_trait::SessionApiRepository;
use super::session_entity::SessionEntity;

pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionApiRepository for SessionRepository {
    async fn insert(&self, session: &SessionEntity) -> Result<()> {
        sqlx::query("INSERT INTO auth_sessions (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(&session.token)
            .bind(session.user_id)
            .bind(session.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
