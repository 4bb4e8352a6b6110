use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{MockAuth, test_app_state};

async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_app(test_app_state(Arc::new(MockAuth::signed_in("u-1")))).await;
    let resp = client().get(format!("{base}/healthz")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn create_without_cookie_redirects_to_login() {
    let base = spawn_app(test_app_state(Arc::new(MockAuth::signed_in("u-1")))).await;
    let resp = client().get(format!("{base}/create")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 307);
    assert_eq!(resp.headers().get("location").unwrap().to_str().unwrap(), "/auth/login");
}

#[tokio::test]
async fn create_with_cookie_renders_form() {
    let base = spawn_app(test_app_state(Arc::new(MockAuth::signed_in("u-123")))).await;
    let resp = client()
        .get(format!("{base}/create"))
        .header("cookie", "sb-access-token=jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Create Post</h1>"));
    assert!(body.contains(r#"value="u-123""#));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let base = spawn_app(test_app_state(Arc::new(MockAuth::signed_in("u-1")))).await;
    let resp = client().get(format!("{base}/nope")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
