use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::land_application_api_repository_trait::LandApplicationApiRepository;
use super::land_application_entity::LandApplicationEntity;

pub struct LandApplicationRepository {
    pool: SqlitePool,
}

impl LandApplicationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LandApplicationApiRepository for LandApplicationRepository {
    async fn list(&self) -> Result<Vec<LandApplicationEntity>> {
        let rows = sqlx::query_as::<_, LandApplicationEntity>(
            "SELECT * FROM land_applications ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<LandApplicationEntity>> {
        let row = sqlx::query_as::<_, LandApplicationEntity>(
            "SELECT * FROM land_applications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, application: &LandApplicationEntity) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO land_applications (land_id, farmer_id, proposed_rent, duration_months, message, status, applied_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(application.land_id)
        .bind(application.farmer_id)
        .bind(application.proposed_rent)
        .bind(application.duration_months)
        .bind(&application.message)
        .bind(&application.status)
        .bind(application.applied_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, application: &LandApplicationEntity) -> Result<()> {
        sqlx::query(
            "UPDATE land_applications SET proposed_rent = ?, duration_months = ?, message = ?, status = ? \
             WHERE id = ?",
        )
        .bind(application.proposed_rent)
        .bind(application.duration_months)
        .bind(&application.message)
        .bind(&application.status)
        .bind(application.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM land_applications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
