use axum::routing::post;
use axum::Router;

use crate::api::controller::prediction::PredictionController;
use crate::app_state::AppState;

pub fn prediction_routes() -> Router<AppState> {
    Router::new().route("/predict", post(PredictionController::predict))
}
