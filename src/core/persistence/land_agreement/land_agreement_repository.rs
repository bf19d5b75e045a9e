use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::land_agreement_api_repository_trait::LandAgreementApiRepository;
use super::land_agreement_entity::LandAgreementEntity;

pub struct LandAgreementRepository {
    pool: SqlitePool,
}

impl LandAgreementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LandAgreementApiRepository for LandAgreementRepository {
    async fn list(&self) -> Result<Vec<LandAgreementEntity>> {
        let rows = sqlx::query_as::<_, LandAgreementEntity>(
            "SELECT * FROM land_agreements ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<LandAgreementEntity>> {
        let row = sqlx::query_as::<_, LandAgreementEntity>(
            "SELECT * FROM land_agreements WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, agreement: &LandAgreementEntity) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO land_agreements (land_id, landowner_id, farmer_id, start_date, end_date, rent_amount, terms, signed_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(agreement.land_id)
        .bind(agreement.landowner_id)
        .bind(agreement.farmer_id)
        .bind(agreement.start_date)
        .bind(agreement.end_date)
        .bind(agreement.rent_amount)
        .bind(&agreement.terms)
        .bind(agreement.signed_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, agreement: &LandAgreementEntity) -> Result<()> {
        sqlx::query(
            "UPDATE land_agreements SET start_date = ?, end_date = ?, rent_amount = ?, terms = ? \
             WHERE id = ?",
        )
        .bind(agreement.start_date)
        .bind(agreement.end_date)
        .bind(agreement.rent_amount)
        .bind(&agreement.terms)
        .bind(agreement.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM land_agreements WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
