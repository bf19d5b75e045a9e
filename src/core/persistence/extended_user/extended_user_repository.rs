use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::extended_user_api_repository_trait::ExtendedUserApiRepository;
use super::extended_user_entity::ExtendedUserEntity;

pub struct ExtendedUserRepository {
    pool: SqlitePool,
}

impl ExtendedUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExtendedUserApiRepository for ExtendedUserRepository {
    async fn list(&self) -> Result<Vec<ExtendedUserEntity>> {
        let rows =
            sqlx::query_as::<_, ExtendedUserEntity>("SELECT * FROM extended_users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<ExtendedUserEntity>> {
        let row =
            sqlx::query_as::<_, ExtendedUserEntity>("SELECT * FROM extended_users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn insert(&self, profile: &ExtendedUserEntity) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO extended_users (user_id, role, phone_number, address, city, state, pincode) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(profile.user_id)
        .bind(&profile.role)
        .bind(&profile.phone_number)
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.pincode)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, profile: &ExtendedUserEntity) -> Result<()> {
        sqlx::query(
            "UPDATE extended_users SET role = ?, phone_number = ?, address = ?, city = ?, state = ?, pincode = ? \
             WHERE id = ?",
        )
        .bind(&profile.role)
        .bind(&profile.phone_number)
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.pincode)
        .bind(profile.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
