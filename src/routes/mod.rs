//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the server-rendered pages and the health probe under a single Axum
//! router. Login itself lives elsewhere; pages only redirect to it.

pub mod auth;
pub mod create;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/create", get(create::create_page))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
