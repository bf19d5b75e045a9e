use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::list_query::{LandApplicationQuery, OwnerQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_created, to_json};
use crate::app_state::AppState;
use crate::core::persistence::land_agreement::land_agreement_entity::LandAgreementEntity;
use crate::core::persistence::land_application::land_application_entity::LandApplicationEntity;
use crate::domain::lease::dto::land_agreement_create_request::LandAgreementCreateRequest;
use crate::domain::lease::dto::land_agreement_patch_request::LandAgreementPatchRequest;
use crate::domain::lease::dto::land_application_create_request::LandApplicationCreateRequest;
use crate::domain::lease::dto::land_application_patch_request::LandApplicationPatchRequest;
use crate::domain::lease::dto::land_application_status_request::LandApplicationStatusRequest;
use crate::errors::AppError;

pub struct LandApplicationController;
pub struct LandAgreementController;

impl LandApplicationController {
    pub async fn list(
        State(state): State<AppState>,
        Query(filter): Query<LandApplicationQuery>,
    ) -> Result<Json<ApiResponse<Vec<LandApplicationEntity>>>, AppError> {
        to_json(
            state
                .lease_service
                .list_land_applications(filter.land_id, filter.farmer_id)
                .await,
        )
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<LandApplicationEntity>>, AppError> {
        to_json(state.lease_service.get_land_application(id).await)
    }

    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<LandApplicationCreateRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<LandApplicationEntity>>), AppError> {
        to_created(state.lease_service.create_land_application(payload).await)
    }

    pub async fn patch(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<LandApplicationPatchRequest>,
    ) -> Result<Json<ApiResponse<LandApplicationEntity>>, AppError> {
        to_json(state.lease_service.patch_land_application(id, payload).await)
    }

    pub async fn update_status(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<LandApplicationStatusRequest>,
    ) -> Result<Json<ApiResponse<LandApplicationEntity>>, AppError> {
        to_json(
            state
                .lease_service
                .update_land_application_status(id, payload)
                .await,
        )
    }

    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.lease_service.delete_land_application(id).await)
    }
}

impl LandAgreementController {
    pub async fn list(
        State(state): State<AppState>,
        Query(filter): Query<OwnerQuery>,
    ) -> Result<Json<ApiResponse<Vec<LandAgreementEntity>>>, AppError> {
        to_json(state.lease_service.list_land_agreements(filter.user_id).await)
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<LandAgreementEntity>>, AppError> {
        to_json(state.lease_service.get_land_agreement(id).await)
    }

    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<LandAgreementCreateRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<LandAgreementEntity>>), AppError> {
        to_created(state.lease_service.create_land_agreement(payload).await)
    }

    pub async fn patch(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<LandAgreementPatchRequest>,
    ) -> Result<Json<ApiResponse<LandAgreementEntity>>, AppError> {
        to_json(state.lease_service.patch_land_agreement(id, payload).await)
    }

    pub async fn delete(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.lease_service.delete_land_agreement(id).await)
    }
}
