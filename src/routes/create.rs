//! `GET /create` — auth-guarded "create post" page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use super::auth::LOGIN_PATH;
use crate::pages::create::render_create_page;
use crate::services::auth::SessionContext;
use crate::state::AppState;

/// Redirect anonymous visitors to the login page; otherwise render the form
/// for the signed-in user. Auth lookup failures become a bare 500.
pub async fn create_page(State(state): State<AppState>, session: SessionContext) -> Response {
    let user = match state.auth.current_user(&session).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, "auth lookup failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    let Some(user) = user else {
        tracing::debug!(has_token = session.access_token.is_some(), "no signed-in user, redirecting to login");
        return Redirect::temporary(LOGIN_PATH).into_response();
    };

    tracing::debug!(user_id = %user.id, email = ?user.email, "rendering create page");
    Html(render_create_page(&user.id)).into_response()
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
