use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::storage_application_api_repository_trait::StorageApplicationApiRepository;
use super::storage_application_entity::StorageApplicationEntity;

pub struct StorageApplicationRepository {
    pool: SqlitePool,
}

impl StorageApplicationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageApplicationApiRepository for StorageApplicationRepository {
    async fn list(&self) -> Result<Vec<StorageApplicationEntity>> {
        let rows = sqlx::query_as::<_, StorageApplicationEntity>(
            "SELECT * FROM storage_applications ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<StorageApplicationEntity>> {
        let row = sqlx::query_as::<_, StorageApplicationEntity>(
            "SELECT * FROM storage_applications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, application: &StorageApplicationEntity) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO storage_applications (storage_id, farmer_id, crop_type, quantity_tons, duration_months, status, applied_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(application.storage_id)
        .bind(application.farmer_id)
        .bind(&application.crop_type)
        .bind(application.quantity_tons)
        .bind(application.duration_months)
        .bind(&application.status)
        .bind(application.applied_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM storage_applications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::db::test_pool;
    use chrono::Utc;

    async fn seed_parties(pool: &SqlitePool) -> (i64, i64) {
        sqlx::query(
            "INSERT INTO users (username, email, password_hash, date_joined) VALUES ('o', 'o@x.com', 'h', ?), ('f', 'f@x.com', 'h', ?)",
        )
        .bind(Utc::now())
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO extended_users (user_id, role) VALUES (1, 'landowner'), (2, 'farmer')",
        )
        .execute(pool)
        .await
        .unwrap();
        let storage = sqlx::query(
            "INSERT INTO storages (extended_user_id, name, location) VALUES (1, 'Cold Store A', 'Pune')",
        )
        .execute(pool)
        .await
        .unwrap();
        (storage.last_insert_rowid(), 2)
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let pool = test_pool().await;
        let repo = StorageApplicationRepository::new(pool.clone());
        let (storage_id, farmer_id) = seed_parties(&pool).await;

        let id = repo
            .insert(&StorageApplicationEntity {
                id: 0,
                storage_id,
                farmer_id,
                crop_type: "wheat".into(),
                quantity_tons: 12.5,
                duration_months: 6,
                status: "pending".into(),
                applied_at: Utc::now(),
            })
            .await
            .unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.find(id).await.unwrap().is_none());
        assert!(!repo.delete(id).await.unwrap());
    }
}
