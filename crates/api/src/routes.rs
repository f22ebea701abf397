use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::lookup))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
