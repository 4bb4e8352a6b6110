//! Auth collaborator — resolves the current request's user against a
//! GoTrue-compatible auth API (Supabase `auth/v1`).
//!
//! DESIGN
//! ======
//! Route handlers only see the `AuthProvider` trait so tests can swap in a
//! mock. `GoTrueAuth` is a thin HTTP wrapper; status/body interpretation lives
//! in `parse_user_response` for testability.

use std::time::Duration;

use serde::Deserialize;

const USER_PATH: &str = "/auth/v1/user";
const CONNECT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// TYPES
// =============================================================================

/// Per-request session state, built from the request cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Bearer access token, if the visitor sent one.
    pub access_token: Option<String>,
}

impl SessionContext {
    /// Build a context from a raw token value. Blank tokens count as absent.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        let access_token = token.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned);
        Self { access_token }
    }

    #[cfg(test)]
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Current user record owned by the auth service. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("auth request failed: {0}")]
    Request(String),
    #[error("auth api error: status {status}")]
    Api { status: u16 },
    #[error("auth response parse failed: {0}")]
    Decode(String),
}

/// Resolves the authenticated user for a session. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Return the current user, or `None` when the session is not
    /// authenticated.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the lookup itself fails.
    async fn current_user(&self, session: &SessionContext) -> Result<Option<AuthUser>, AuthError>;
}

// =============================================================================
// GOTRUE CLIENT
// =============================================================================

pub struct GoTrueAuth {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl GoTrueAuth {
    /// Build a client for the auth API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: &str, anon_key: String, timeout_secs: u64) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), anon_key })
    }

    fn user_url(&self) -> String {
        format!("{}{USER_PATH}", self.base_url)
    }
}

#[async_trait::async_trait]
impl AuthProvider for GoTrueAuth {
    async fn current_user(&self, session: &SessionContext) -> Result<Option<AuthUser>, AuthError> {
        let Some(token) = session.access_token.as_deref() else {
            return Ok(None);
        };

        let response = self
            .http
            .get(self.user_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        parse_user_response(status, &body)
    }
}

/// Interpret an `auth/v1/user` response.
///
/// `401`/`403` mean the token is not valid and map to `Ok(None)`. A user
/// without an id is treated the same way.
pub(crate) fn parse_user_response(status: u16, body: &str) -> Result<Option<AuthUser>, AuthError> {
    match status {
        200 => {}
        401 | 403 => return Ok(None),
        _ => return Err(AuthError::Api { status }),
    }

    let user: AuthUser = serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))?;
    if user.id.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(user))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
