use axum::routing::get;
use axum::Router;

use crate::api::controller::profile::{ExtendedUserController, FarmerDetailController};
use crate::app_state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/extended-users",
            get(ExtendedUserController::list).post(ExtendedUserController::create),
        )
        .route(
            "/extended-users/{id}",
            get(ExtendedUserController::get).patch(ExtendedUserController::patch),
        )
        .route(
            "/farmers",
            get(FarmerDetailController::list).post(FarmerDetailController::create),
        )
        .route(
            "/farmers/{id}",
            get(FarmerDetailController::get).patch(FarmerDetailController::patch),
        )
}
