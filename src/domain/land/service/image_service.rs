use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::core::persistence::image::image_api_repository_trait::ImageApiRepository;
use crate::core::persistence::image::image_entity::ImageEntity;
use crate::core::persistence::image::image_repository::ImageRepository;
use crate::domain::land::dto::uploaded_image::UploadedImage;
use crate::errors::AppError;

pub async fn list_images(pool: &SqlitePool) -> Result<Vec<ImageEntity>> {
    let repo = ImageRepository::new(pool.clone());
    repo.list().await
}

/// Persist one media file and one row per uploaded part.
pub async fn store_images(
    pool: &SqlitePool,
    media_root: &str,
    uploads: Vec<UploadedImage>,
) -> Result<Vec<ImageEntity>> {
    let repo = ImageRepository::new(pool.clone());
    store_with_repo(&repo, media_root, uploads).await
}

async fn store_with_repo<R: ImageApiRepository>(
    repo: &R,
    media_root: &str,
    uploads: Vec<UploadedImage>,
) -> Result<Vec<ImageEntity>> {
    if uploads.is_empty() {
        return Err(AppError::BadRequest("No files provided.".into()).into());
    }

    tokio::fs::create_dir_all(media_root)
        .await
        .with_context(|| format!("Failed to create media dir {media_root}"))?;

    let mut created = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let file_name = unique_file_name(upload.file_name.as_deref());
        let path = Path::new(media_root).join(&file_name);

        tokio::fs::write(&path, &upload.content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let mut image = ImageEntity {
            id: 0,
            land_id: upload.land_id,
            file_path: path.to_string_lossy().into_owned(),
            uploaded_at: Utc::now(),
        };
        image.id = repo.insert(&image).await?;
        debug!("Stored image #{} at {}", image.id, image.file_path);
        created.push(image);
    }

    Ok(created)
}

/// Random name, keeping the client's extension when it has one.
fn unique_file_name(original: Option<&str>) -> String {
    let stem = Uuid::new_v4().simple().to_string();
    match original.and_then(|n| n.rsplit_once('.')).map(|(_, ext)| ext) {
        Some(ext) if !ext.is_empty() => format!("{stem}.{}", ext.to_ascii_lowercase()),
        _ => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockImageRepository {
        rows: Mutex<Vec<ImageEntity>>,
    }

    #[async_trait]
    impl ImageApiRepository for MockImageRepository {
        async fn list(&self) -> Result<Vec<ImageEntity>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert(&self, image: &ImageEntity) -> Result<i64> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let mut stored = image.clone();
            stored.id = id;
            rows.push(stored);
            Ok(id)
        }
    }

    fn scratch_dir() -> String {
        std::env::temp_dir()
            .join(format!("farmlease-test-{}", Uuid::new_v4().simple()))
            .to_string_lossy()
            .into_owned()
    }

    #[tokio::test]
    async fn empty_upload_is_a_bad_request() {
        let repo = MockImageRepository::default();

        let err = store_with_repo(&repo, &scratch_dir(), Vec::new())
            .await
            .expect_err("no files");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::BadRequest(_))
        ));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn each_file_becomes_a_distinct_row() {
        let repo = MockImageRepository::default();
        let dir = scratch_dir();

        let uploads = vec![
            UploadedImage {
                file_name: Some("north-field.jpg".into()),
                content: b"jpegdata".to_vec(),
                land_id: Some(1),
            },
            UploadedImage {
                file_name: Some("south-field.png".into()),
                content: b"pngdata".to_vec(),
                land_id: None,
            },
        ];

        let created = store_with_repo(&repo, &dir, uploads).await.unwrap();

        assert_eq!(created.len(), 2);
        assert_ne!(created[0].id, created[1].id);
        assert_ne!(created[0].file_path, created[1].file_path);
        assert!(created[0].file_path.ends_with(".jpg"));
        for image in &created {
            assert!(std::path::Path::new(&image.file_path).exists());
        }

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[test]
    fn extension_is_preserved_case_insensitively() {
        let name = unique_file_name(Some("Plot.JPG"));
        assert!(name.ends_with(".jpg"));

        let bare = unique_file_name(None);
        assert!(!bare.contains('.'));
    }
}
