use axum::routing::{get, patch};
use axum::Router;

use crate::api::controller::lease::{LandAgreementController, LandApplicationController};
use crate::app_state::AppState;

pub fn lease_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/land-applications",
            get(LandApplicationController::list).post(LandApplicationController::create),
        )
        .route(
            "/land-applications/{id}",
            get(LandApplicationController::get)
                .patch(LandApplicationController::patch)
                .delete(LandApplicationController::delete),
        )
        .route(
            "/land-applications/{id}/status",
            patch(LandApplicationController::update_status),
        )
        .route(
            "/land-agreements",
            get(LandAgreementController::list).post(LandAgreementController::create),
        )
        .route(
            "/land-agreements/{id}",
            get(LandAgreementController::get)
                .patch(LandAgreementController::patch)
                .delete(LandAgreementController::delete),
        )
}
