//! skybook booking service.
//!
//! Routes:
//! - GET  /        liveness
//! - GET  /info    task-metadata report
//! - POST /make    echo + generated id
//! - POST /update  echo
//! - POST /delete  echo

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use skybook_booking::{app_state, router};
use skybook_core::config;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Missing booking.yaml is fine; the PoC runs on defaults.
    let cfg = config::load_or_default("booking.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .service
        .listen
        .parse()
        .expect("service.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state build failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "skybook-booking starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
