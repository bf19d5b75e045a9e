use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::user_api_repository_trait::UserApiRepository;
use super::user_entity::UserEntity;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserApiRepository for UserRepository {
    async fn find(&self, id: i64) -> Result<Option<UserEntity>> {
        let row = sqlx::query_as::<_, UserEntity>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>> {
        let row = sqlx::query_as::<_, UserEntity>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>> {
        let row = sqlx::query_as::<_, UserEntity>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, user: &UserEntity) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, first_name, last_name, date_joined, last_login) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.date_joined)
        .bind(user.last_login)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn record_login(&self, id: i64, at: DateTime<Utc>) -> Result<()> {
        sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
            .bind(at)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
