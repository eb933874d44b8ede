//! Axum router wiring for the booking service.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::ops::health))
        .route("/info", get(handlers::ops::info))
        .route("/make", post(handlers::booking::make))
        .route("/update", post(handlers::booking::update))
        .route("/delete", post(handlers::booking::delete))
        .with_state(state)
}
