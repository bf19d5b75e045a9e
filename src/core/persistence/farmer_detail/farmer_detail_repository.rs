use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::farmer_detail_api_repository_trait::FarmerDetailApiRepository;
use super::farmer_detail_entity::FarmerDetailEntity;

pub struct FarmerDetailRepository {
    pool: SqlitePool,
}

impl FarmerDetailRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FarmerDetailApiRepository for FarmerDetailRepository {
    async fn list(&self) -> Result<Vec<FarmerDetailEntity>> {
        let rows =
            sqlx::query_as::<_, FarmerDetailEntity>("SELECT * FROM farmer_details ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<FarmerDetailEntity>> {
        let row =
            sqlx::query_as::<_, FarmerDetailEntity>("SELECT * FROM farmer_details WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn insert(&self, detail: &FarmerDetailEntity) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO farmer_details (extended_user_id, farm_size_acres, experience_years, preferred_crops) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(detail.extended_user_id)
        .bind(detail.farm_size_acres)
        .bind(detail.experience_years)
        .bind(&detail.preferred_crops)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, detail: &FarmerDetailEntity) -> Result<()> {
        sqlx::query(
            "UPDATE farmer_details SET farm_size_acres = ?, experience_years = ?, preferred_crops = ? \
             WHERE id = ?",
        )
        .bind(detail.farm_size_acres)
        .bind(detail.experience_years)
        .bind(&detail.preferred_crops)
        .bind(detail.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
