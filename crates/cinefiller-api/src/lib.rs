//! Cinefiller read-only HTTP API.
//!
//! Exposes the script, scene and dialogue views that back the script screens
//! as JSON.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Builds the application router with all routes mounted.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/projects", routes::scripts::router())
        .with_state(state)
}
