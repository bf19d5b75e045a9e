use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::land_api_repository_trait::LandApiRepository;
use super::land_entity::LandEntity;

pub struct LandRepository {
    pool: SqlitePool,
}

impl LandRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LandApiRepository for LandRepository {
    async fn list(&self) -> Result<Vec<LandEntity>> {
        let rows = sqlx::query_as::<_, LandEntity>("SELECT * FROM lands ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<LandEntity>> {
        let row = sqlx::query_as::<_, LandEntity>("SELECT * FROM lands WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, land: &LandEntity) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO lands (extended_user_id, title, location, area_acres, soil_type, water_source, \
             expected_rent, description, is_available, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(land.extended_user_id)
        .bind(&land.title)
        .bind(&land.location)
        .bind(land.area_acres)
        .bind(&land.soil_type)
        .bind(&land.water_source)
        .bind(land.expected_rent)
        .bind(&land.description)
        .bind(land.is_available)
        .bind(land.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, land: &LandEntity) -> Result<()> {
        sqlx::query(
            "UPDATE lands SET title = ?, location = ?, area_acres = ?, soil_type = ?, water_source = ?, \
             expected_rent = ?, description = ?, is_available = ? WHERE id = ?",
        )
        .bind(&land.title)
        .bind(&land.location)
        .bind(land.area_acres)
        .bind(&land.soil_type)
        .bind(&land.water_source)
        .bind(land.expected_rent)
        .bind(&land.description)
        .bind(land.is_available)
        .bind(land.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM lands WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
