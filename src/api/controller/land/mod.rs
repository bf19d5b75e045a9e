use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::list_query::LandOwnerQuery;
use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_created, to_json};
use crate::app_state::AppState;
use crate::core::persistence::image::image_entity::ImageEntity;
use crate::core::persistence::land::land_entity::LandEntity;
use crate::domain::land::dto::land_create_request::LandCreateRequest;
use crate::domain::land::dto::land_patch_request::LandPatchRequest;
use crate::domain::land::dto::uploaded_image::UploadedImage;
use crate::errors::AppError;

pub struct LandController;
pub struct ImageController;

impl LandController {
    pub async fn list(
        State(state): State<AppState>,
        Query(filter): Query<LandOwnerQuery>,
    ) -> Result<Json<ApiResponse<Vec<LandEntity>>>, AppError> {
        to_json(state.land_service.list_lands(filter.owner_id).await)
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<LandEntity>>, AppError> {
        to_json(state.land_service.get_land(id).await)
    }

    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<LandCreateRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<LandEntity>>), AppError> {
        to_created(state.land_service.create_land(payload).await)
    }

    pub async fn patch(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<LandPatchRequest>,
    ) -> Result<Json<ApiResponse<LandEntity>>, AppError> {
        to_json(state.land_service.patch_land(id, payload).await)
    }

    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.land_service.delete_land(id).await)
    }
}

impl ImageController {
    pub async fn list(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<ImageEntity>>>, AppError> {
        to_json(state.land_service.list_images().await)
    }

    /// Multipart upload: every part named `images` is stored as one Image row;
    /// an optional `land_id` text part attaches the files to a land.
    pub async fn upload(
        State(state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<(StatusCode, Json<ApiResponse<Vec<ImageEntity>>>), AppError> {
        let mut land_id: Option<i64> = None;
        let mut uploads = Vec::new();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == "land_id" {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                land_id = text.trim().parse().ok();
                continue;
            }

            if name == "images" {
                let file_name = field.file_name().map(str::to_string);
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                uploads.push(UploadedImage {
                    file_name,
                    content: content.to_vec(),
                    land_id: None,
                });
            }
        }

        for upload in &mut uploads {
            upload.land_id = land_id;
        }

        to_created(state.land_service.store_images(uploads).await)
    }
}
