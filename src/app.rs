// src/app.rs

use axum::{Router, extract::DefaultBodyLimit};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::auth::services::LoginService;
use crate::handlers::login::login;

/// Taille maximale acceptée pour le corps d'une requête de login
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Construit l'application complète.
/// Un seul point d'entrée : toute requête, quel que soit le chemin, arrive au handler de login.
pub fn build_router(login_service: Arc<LoginService>) -> Router {
    Router::new()
        .fallback(login)
        .with_state(login_service)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Middleware global de tracing
        .layer(TraceLayer::new_for_http())
}
