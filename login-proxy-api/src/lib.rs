//! # login-proxy-api
//!
//! Shared API types for the login-proxy service.
//! This crate is designed to be WASM-compatible and can be used in both
//! backend (Rust) and frontend (WASM/TypeScript via wasm-bindgen) applications.
//!
//! ## Features
//!
//! - Request DTO (`LoginRequest`)
//! - Response envelope (`LoginResponse`)
//! - Generic response wrapper (`AppResponse`)
//!
//! ## Example
//!
//! ```rust
//! use login_proxy_api::{LoginRequest, LoginResponse};
//!
//! let request = LoginRequest {
//!     username: "alice_01".to_string(),
//!     password: "Passw0rd!".to_string(),
//! };
//!
//! let failure = LoginResponse::failure("Backend authentication failed");
//! assert!(!failure.success);
//! ```

pub mod requests;
pub mod responses;
pub mod result;

// Re-exports for convenient access
pub use requests::*;
pub use responses::*;
pub use result::{AppResponse, StatusCode};
