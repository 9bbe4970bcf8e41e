// src/error.rs

use axum::{
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use login_proxy_api::{LoginResponse, StatusCode as ApiStatusCode};

use crate::auth::validation::ValidationError;
use crate::response::AppResponse;

/// Message commun aux échecs de validation : ne révèle pas quel champ est en cause
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid username or password format";
/// Message renvoyé quand le backend est injoignable ou répond n'importe quoi
pub const BACKEND_FAILED_MESSAGE: &str = "Backend authentication failed";

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs de la porte d'entrée ===
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("Unsupported media type")]
    UnsupportedMediaType,
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    // === Erreurs de validation ===
    #[error("Validation failed: {0}")]
    ValidationFailure(#[from] ValidationError),

    // === Erreurs du backend ===
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.get_error_info();

        // Only the reason is logged, never the submitted values
        match &self {
            AppError::BackendUnavailable(detail) => {
                tracing::warn!(status = status.as_u16(), detail, "Backend call failed");
            }
            other => {
                tracing::debug!(status = status.as_u16(), reason = %other, "Login request rejected");
            }
        }

        let mut response =
            AppResponse::new(status, LoginResponse::failure(message)).into_response();

        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

        if matches!(self, AppError::MethodNotAllowed(_)) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }

        response
    }
}

impl AppError {
    /// Récupère le statut HTTP et le message public de l'erreur
    fn get_error_info(&self) -> (ApiStatusCode, &'static str) {
        match self {
            // 405 Method Not Allowed
            AppError::MethodNotAllowed(_) => (ApiStatusCode::MethodNotAllowed, "Method Not Allowed"),

            // 415 Unsupported Media Type
            AppError::UnsupportedMediaType => {
                (ApiStatusCode::UnsupportedMediaType, "Unsupported Media Type")
            }

            // 400 Bad Request
            AppError::MalformedRequest(_) => (ApiStatusCode::BadRequest, "Bad Request"),

            // 401 Unauthorized : même forme pour la validation et le backend
            AppError::ValidationFailure(_) => (ApiStatusCode::Unauthorized, INVALID_FORMAT_MESSAGE),
            AppError::BackendUnavailable(_) => (ApiStatusCode::Unauthorized, BACKEND_FAILED_MESSAGE),
        }
    }

    // === Constructeurs helpers ===
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedRequest(msg.into())
    }

    pub fn backend_unavailable(msg: impl Into<String>) -> Self {
        AppError::BackendUnavailable(msg.into())
    }

    /// Retourne le code de statut HTTP
    #[cfg(test)]
    pub fn status_code(&self) -> axum::http::StatusCode {
        crate::response::convert_status(self.get_error_info().0)
    }
}

// Depuis axum::extract::rejection::BytesRejection
impl From<axum::extract::rejection::BytesRejection> for AppError {
    fn from(err: axum::extract::rejection::BytesRejection) -> Self {
        AppError::malformed(format!("Unreadable body: {err}"))
    }
}

// Depuis BackendError
impl From<crate::auth::backend::BackendError> for AppError {
    fn from(err: crate::auth::backend::BackendError) -> Self {
        AppError::backend_unavailable(err.to_string())
    }
}
