mod config;
mod pages;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use config::AppConfig;
use services::auth::GoTrueAuth;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let auth = match GoTrueAuth::new(&config.auth_url, config.auth_anon_key.clone(), config.auth_timeout_secs) {
        Ok(auth) => auth,
        Err(e) => {
            tracing::error!(error = %e, "auth client init failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(auth_url = %config.auth_url, cookie = %config.auth_cookie_name, "auth client initialized");

    let state = state::AppState::new(Arc::new(auth), &config.auth_cookie_name);
    let app = routes::app(state);

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "postdesk listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
