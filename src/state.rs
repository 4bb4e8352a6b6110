//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It is immutable after startup: the auth collaborator and the name of the
//! cookie that carries the access token.

use std::sync::Arc;

use crate::services::auth::AuthProvider;

/// Per-process handles every page route needs: who is signed in, and which
/// cookie to look in. Cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthProvider>,
    pub auth_cookie_name: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthProvider>, auth_cookie_name: &str) -> Self {
        Self { auth, auth_cookie_name: Arc::from(auth_cookie_name) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
