//! The launch-api HTTP service: routing and request handling over the
//! launch service. The binary in `main.rs` wires this up from environment
//! configuration.

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

pub mod config;
pub mod handlers;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Build the service router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/v1/launches",
            get(handlers::list_launches).post(handlers::create_launch),
        )
        .route("/v1/launches/:flight_number", delete(handlers::abort_launch))
        .route("/v1/planets", get(handlers::list_planets))
        .with_state(state)
}
