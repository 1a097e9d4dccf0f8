//! flashpdf-server library root.
//!
//! Builds the axum router so that `main` and the integration tests share
//! one wiring of routes and layers.

pub mod config;
pub mod error;
pub mod middleware;
pub mod page;
pub mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};

use config::ServerConfig;
use state::AppState;

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(routes::form::upload_form))
        .route("/generate", post(routes::generate::generate_pdf))
        .route("/health", get(routes::health::health_check))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .with_state(state)
}
