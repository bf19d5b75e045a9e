use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct PredictionController;

impl PredictionController {
    /// Request payload is opaque; the predictor owns the schema.
    pub async fn predict(
        State(state): State<AppState>,
        Json(payload): Json<Value>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.prediction_service.predict(payload).await)
    }
}
