use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_created, to_json};
use crate::app_state::AppState;
use crate::domain::auth::dto::user_login_request::UserLoginRequest;
use crate::domain::auth::dto::user_registration_request::UserRegistrationRequest;
use crate::domain::auth::service::auth_service;
use crate::errors::AppError;

pub struct AuthController;

impl AuthController {
    pub async fn register(
        State(state): State<AppState>,
        Json(payload): Json<UserRegistrationRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
        to_created(state.auth_service.register(payload).await)
    }

    pub async fn login(
        State(state): State<AppState>,
        Json(payload): Json<UserLoginRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.auth_service.login(payload).await)
    }

    pub async fn csrf_token() -> Json<Value> {
        Json(auth_service::issue_csrf_token())
    }
}
