use serde::{Deserialize, Serialize};

/// HTTP status codes used by the login endpoint
/// This is WASM-compatible and doesn't depend on `axum::http::StatusCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    Unauthorized = 401,
    MethodNotAllowed = 405,
    UnsupportedMediaType = 415,
}

impl StatusCode {
    /// Numeric HTTP status
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Generic API response wrapper
///
/// The backend wraps this in a type that implements Axum's `IntoResponse` trait.
///
/// # Examples
///
/// ```rust
/// use login_proxy_api::{AppResponse, LoginResponse, StatusCode};
///
/// let response = AppResponse::ok(LoginResponse::authenticated("abc"));
/// assert_eq!(response.status, StatusCode::Ok);
///
/// let response = AppResponse::unauthorized(LoginResponse::failure("bad creds"));
/// assert_eq!(response.status.as_u16(), 401);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status: StatusCode,
}

impl<T> AppResponse<T> {
    /// Creates a new response with a status code and data
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data: Some(data),
        }
    }

    /// Creates an empty response with a status code
    pub fn empty(status: StatusCode) -> Self {
        Self { status, data: None }
    }

    // === Common status code constructors ===

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::Ok, data)
    }

    /// 401 Unauthorized with data
    pub fn unauthorized(data: T) -> Self {
        Self::new(StatusCode::Unauthorized, data)
    }
}
