use axum::routing::{get, post};
use axum::Router;

use crate::api::controller::auth::AuthController;
use crate::app_state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(AuthController::register))
        .route("/login", post(AuthController::login))
        .route("/csrf", get(AuthController::csrf_token))
}
