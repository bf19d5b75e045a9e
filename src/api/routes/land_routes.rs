use axum::routing::{get, post};
use axum::Router;

use crate::api::controller::land::{ImageController, LandController};
use crate::app_state::AppState;

pub fn land_routes() -> Router<AppState> {
    Router::new()
        .route("/lands", get(LandController::list).post(LandController::create))
        .route(
            "/lands/{id}",
            get(LandController::get)
                .patch(LandController::patch)
                .delete(LandController::delete),
        )
        .route("/images", get(ImageController::list))
        .route("/images/upload", post(ImageController::upload))
}
