//! Session extraction — turns the auth cookie into a `SessionContext`.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::services::auth::SessionContext;
use crate::state::AppState;

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/auth/login";

/// Never rejects: a missing or empty cookie yields an anonymous session and
/// the handler decides what to do with it.
impl<S> FromRequestParts<S> for SessionContext
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(&app_state.auth_cookie_name).map(Cookie::value);
        Ok(SessionContext::from_token(token))
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
