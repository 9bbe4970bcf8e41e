use std::env;
use std::sync::Arc;
mod app;
mod auth;
mod config;
mod error;
mod handlers;
mod response;

use app::build_router;
use auth::backend::{BackendEndpoint, HttpAuthBackend};
use auth::services::LoginService;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Si RUST_LOG n'est pas défini, utiliser ces règles par défaut
        tracing_subscriber::EnvFilter::new(
            "info,login_proxy=debug,hyper_util=warn,tower_http=info",
        )
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    // Initialize logging for all environments
    setup_logging();
    tracing::info!("Starting login-proxy...");

    let config = Config::from_env()?;

    let endpoint = BackendEndpoint {
        url: config.backend_auth_url.clone(),
        secret: config.backend_auth_secret.clone(),
    };
    let backend = HttpAuthBackend::new(endpoint, config.backend_timeout)?;
    let app = build_router(Arc::new(LoginService::new(Arc::new(backend))));

    if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        if config.is_production() {
            tracing::warn!("APP_ENV is production but not running on Lambda");
        }
        tracing::info!("Running in local HTTP server mode");
        let addr = format!("{}:{}", config.server_host, config.server_port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
