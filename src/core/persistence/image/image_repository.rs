use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::image_api_repository_trait::ImageApiRepository;
use super::image_entity::ImageEntity;

pub struct ImageRepository {
    pool: SqlitePool,
}

impl ImageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageApiRepository for ImageRepository {
    async fn list(&self) -> Result<Vec<ImageEntity>> {
        let rows = sqlx::query_as::<_, ImageEntity>("SELECT * FROM images ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, image: &ImageEntity) -> Result<i64> {
        let result =
            sqlx::query("INSERT INTO images (land_id, file_path, uploaded_at) VALUES (?, ?, ?)")
                .bind(image.land_id)
                .bind(&image.file_path)
                .bind(image.uploaded_at)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_rowid())
    }
}
