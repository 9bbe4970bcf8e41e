use axum::{
    Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use login_proxy_api::StatusCode as ApiStatusCode;
use serde::Serialize;

/// Réponse JSON des handlers, avec le statut du crate `login-proxy-api`.
///
/// Ajoute l'intégration Axum :
/// - implémentation du trait `IntoResponse`
/// - headers HTTP optionnels
/// - conversion du `StatusCode` de l'API vers celui d'Axum
///
/// # Examples
///
/// ```rust
/// use crate::response::AppResponse;
///
/// // Successful login
/// AppResponse::ok(LoginResponse::authenticated(token))
///
/// // Login refused by the backend
/// AppResponse::unauthorized(envelope)
/// ```
pub struct AppResponse<T> {
    status: ApiStatusCode,
    body: T,
    headers: Option<HeaderMap>,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// Creates a new response with a status code and a JSON body
    pub fn new(status: ApiStatusCode, body: T) -> Self {
        Self {
            status,
            body,
            headers: None,
        }
    }

    /// Adds HTTP headers to the response
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    // === Convenience constructors ===

    /// 200 OK with data
    pub fn ok(body: T) -> Self {
        Self::new(ApiStatusCode::Ok, body)
    }

    /// 401 Unauthorized with data
    pub fn unauthorized(body: T) -> Self {
        Self::new(ApiStatusCode::Unauthorized, body)
    }
}

/// Converts the API `StatusCode` to Axum's `StatusCode`
pub fn convert_status(api_status: ApiStatusCode) -> StatusCode {
    match api_status {
        ApiStatusCode::Ok => StatusCode::OK,
        ApiStatusCode::BadRequest => StatusCode::BAD_REQUEST,
        ApiStatusCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ApiStatusCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ApiStatusCode::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
    }
}

/// Implements Axum's `IntoResponse` trait for our wrapper
impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let mut response = (convert_status(self.status), Json(self.body)).into_response();

        if let Some(headers) = self.headers {
            response.headers_mut().extend(headers);
        }

        response
    }
}
