//! Axum router wiring for the user service.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::ops::health))
        .route("/info", get(handlers::ops::info))
        .route("/login", post(handlers::account::login))
        .route("/update", post(handlers::account::update_preference))
        .route("/preference/:username", get(handlers::account::preference))
        .with_state(state)
}
