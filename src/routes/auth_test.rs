use std::sync::Arc;

use axum::http::Request;
use axum::http::header::COOKIE;

use super::*;
use crate::state::test_helpers::{MockAuth, test_app_state};

async fn extract(cookie: Option<&str>) -> SessionContext {
    let state = test_app_state(Arc::new(MockAuth::signed_in("u-1")));
    let mut builder = Request::builder().uri("/create");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    SessionContext::from_request_parts(&mut parts, &state).await.unwrap()
}

#[tokio::test]
async fn reads_token_from_auth_cookie() {
    let session = extract(Some("theme=dark; sb-access-token=jwt-abc")).await;
    assert_eq!(session.access_token.as_deref(), Some("jwt-abc"));
}

#[tokio::test]
async fn missing_cookie_is_anonymous() {
    assert_eq!(extract(None).await, SessionContext::anonymous());
}

#[tokio::test]
async fn unrelated_cookie_is_anonymous() {
    assert_eq!(extract(Some("theme=dark")).await, SessionContext::anonymous());
}

#[tokio::test]
async fn empty_cookie_is_anonymous() {
    assert_eq!(extract(Some("sb-access-token=")).await, SessionContext::anonymous());
}

#[tokio::test]
async fn honors_configured_cookie_name() {
    let state = AppState::new(Arc::new(MockAuth::signed_in("u-1")), "custom-token");
    let (mut parts, ()) = Request::builder()
        .header(COOKIE, "sb-access-token=ignored; custom-token=jwt-xyz")
        .body(())
        .unwrap()
        .into_parts();
    let session = SessionContext::from_request_parts(&mut parts, &state).await.unwrap();
    assert_eq!(session.access_token.as_deref(), Some("jwt-xyz"));
}

#[test]
fn login_path_is_fixed() {
    assert_eq!(LOGIN_PATH, "/auth/login");
}
