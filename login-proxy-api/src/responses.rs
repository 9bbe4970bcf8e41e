use serde::{Deserialize, Serialize};

/// Envelope returned to the caller of the login endpoint.
///
/// Only these three fields ever leave the proxy; anything else the
/// authentication backend sends is dropped on the way through.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Successful login carrying the backend token
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            success: true,
            token: Some(token.into()),
            message: None,
        }
    }

    /// Failed login with a caller-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            message: Some(message.into()),
        }
    }
}
