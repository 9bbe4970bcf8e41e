// src/handlers/login.rs

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};

use crate::auth::extractors::LoginCredentials;
use crate::auth::services::LoginService;
use crate::error::AppError;
use crate::response::AppResponse;

/// POST (n'importe quel chemin)
/// Valide les identifiants et relaie la réponse du backend d'authentification
pub async fn login(
    State(login_service): State<Arc<LoginService>>,
    LoginCredentials(payload): LoginCredentials,
) -> Result<Response, AppError> {
    let envelope = login_service.login(&payload).await?;

    // Une réponse portant un token ne doit pas être mise en cache
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    let response = if envelope.success {
        AppResponse::ok(envelope)
    } else {
        AppResponse::unauthorized(envelope)
    };

    Ok(response.with_headers(headers).into_response())
}
