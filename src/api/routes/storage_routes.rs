use axum::routing::get;
use axum::Router;

use crate::api::controller::storage::{StorageApplicationController, StorageController};
use crate::app_state::AppState;

pub fn storage_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/storages",
            get(StorageController::list).post(StorageController::create),
        )
        .route(
            "/storage-applications",
            get(StorageApplicationController::list).post(StorageApplicationController::create),
        )
        .route(
            "/storage-applications/{id}",
            axum::routing::delete(StorageApplicationController::delete),
        )
}
