use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, Method, header};
use login_proxy_api::LoginRequest;
use serde_json::Value;

use crate::error::AppError;

/// Extracteur d'entrée pour la route de login.
/// Vérifie la méthode `POST`, le `Content-Type` JSON, puis lit le corps une
/// seule fois et applique un contrôle de schéma explicite.
#[derive(Debug, Clone)]
pub struct LoginCredentials(pub LoginRequest);

/// Résultat du contrôle de schéma sur le corps brut
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedBody {
    Parsed(LoginRequest),
    Malformed(&'static str),
}

impl ParsedBody {
    pub fn from_slice(body: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<Value>(body) else {
            return Self::Malformed("body is not valid JSON");
        };
        let Value::Object(mut fields) = value else {
            return Self::Malformed("body is not a JSON object");
        };

        let username = match fields.remove("username") {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Self::Malformed("username must be a non-empty string"),
        };
        let password = match fields.remove("password") {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Self::Malformed("password must be a non-empty string"),
        };

        Self::Parsed(LoginRequest { username, password })
    }
}

/// `application/json`, avec ou sans paramètres, ou un type structuré `+json`
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl<S> FromRequest<S> for LoginCredentials
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // La méthode est vérifiée avant toute lecture du corps
        if req.method() != Method::POST {
            return Err(AppError::MethodNotAllowed(req.method().to_string()));
        }

        if !is_json_content_type(req.headers()) {
            return Err(AppError::UnsupportedMediaType);
        }

        let body = Bytes::from_request(req, state).await?;

        match ParsedBody::from_slice(&body) {
            ParsedBody::Parsed(request) => Ok(Self(request)),
            ParsedBody::Malformed(reason) => Err(AppError::malformed(reason)),
        }
    }
}
