use std::fmt;

use serde::{Deserialize, Serialize};

// -------- REQUEST DTOs --------

/// Body of `POST /` as sent by a client.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String, // Plain text
}

// Never print credentials, not even the username
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}
