use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::list_query::{OwnerQuery, ProfileOwnerQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_created, to_json};
use crate::app_state::AppState;
use crate::core::persistence::extended_user::extended_user_entity::ExtendedUserEntity;
use crate::core::persistence::farmer_detail::farmer_detail_entity::FarmerDetailEntity;
use crate::domain::profile::dto::extended_user_create_request::ExtendedUserCreateRequest;
use crate::domain::profile::dto::extended_user_patch_request::ExtendedUserPatchRequest;
use crate::domain::profile::dto::farmer_detail_create_request::FarmerDetailCreateRequest;
use crate::domain::profile::dto::farmer_detail_patch_request::FarmerDetailPatchRequest;
use crate::errors::AppError;

pub struct ExtendedUserController;
pub struct FarmerDetailController;

impl ExtendedUserController {
    pub async fn list(
        State(state): State<AppState>,
        Query(filter): Query<OwnerQuery>,
    ) -> Result<Json<ApiResponse<Vec<ExtendedUserEntity>>>, AppError> {
        to_json(state.profile_service.list_extended_users(filter.user_id).await)
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<ExtendedUserEntity>>, AppError> {
        to_json(state.profile_service.get_extended_user(id).await)
    }

    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<ExtendedUserCreateRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<ExtendedUserEntity>>), AppError> {
        to_created(state.profile_service.create_extended_user(payload).await)
    }

    pub async fn patch(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<ExtendedUserPatchRequest>,
    ) -> Result<Json<ApiResponse<ExtendedUserEntity>>, AppError> {
        to_json(state.profile_service.patch_extended_user(id, payload).await)
    }
}

impl FarmerDetailController {
    pub async fn list(
        State(state): State<AppState>,
        Query(filter): Query<ProfileOwnerQuery>,
    ) -> Result<Json<ApiResponse<Vec<FarmerDetailEntity>>>, AppError> {
        to_json(
            state
                .profile_service
                .list_farmer_details(filter.extended_user_id)
                .await,
        )
    }

    pub async fn get(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<FarmerDetailEntity>>, AppError> {
        to_json(state.profile_service.get_farmer_detail(id).await)
    }

    pub async fn create(
        State(state): State<AppState>,
        Json(payload): Json<FarmerDetailCreateRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<FarmerDetailEntity>>), AppError> {
        to_created(state.profile_service.create_farmer_detail(payload).await)
    }

    pub async fn patch(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(payload): Json<FarmerDetailPatchRequest>,
    ) -> Result<Json<ApiResponse<FarmerDetailEntity>>, AppError> {
        to_json(state.profile_service.patch_farmer_detail(id, payload).await)
    }
}
