// src/auth/services.rs

use std::sync::Arc;

use login_proxy_api::{LoginRequest, LoginResponse};

use super::backend::AuthBackend;
use super::validation::validate;
use crate::error::AppError;

pub struct LoginService {
    backend: Arc<dyn AuthBackend>,
}

impl LoginService {
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self { backend }
    }

    /// Connexion : nettoie et valide, puis délègue au backend.
    ///
    /// Renvoie l'enveloppe du backend telle quelle (réduite à
    /// `success`/`token`/`message`), qu'elle soit positive ou non.
    /// Les échecs de validation ou d'appel sont des `AppError`.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let credentials = validate(request)?;

        let envelope = self.backend.authenticate(&credentials).await?;

        if envelope.success {
            tracing::info!("Backend accepted login");
        } else {
            tracing::info!("Backend refused login");
        }

        Ok(envelope)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::auth::backend::BackendError;
    use crate::auth::validation::{Credentials, ValidationError};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Faux backend : renvoie une réponse fixe et compte les appels
    pub struct FakeBackend {
        reply: Mutex<Option<Result<LoginResponse, BackendError>>>,
        pub calls: AtomicUsize,
    }

    impl FakeBackend {
        pub fn replying(reply: Result<LoginResponse, BackendError>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AuthBackend for FakeBackend {
        async fn authenticate(
            &self,
            _credentials: &Credentials,
        ) -> Result<LoginResponse, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .lock()
                .unwrap()
                .take()
                .expect("backend called more than once")
        }
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn login_relays_backend_success() {
        let backend = FakeBackend::replying(Ok(LoginResponse::authenticated("abc")));
        let service = LoginService::new(backend.clone());

        let envelope = service.login(&request("validUser1", "Passw0rd!")).await.unwrap();
        assert_eq!(envelope, LoginResponse::authenticated("abc"));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn login_relays_backend_refusal() {
        let backend = FakeBackend::replying(Ok(LoginResponse::failure("bad creds")));
        let service = LoginService::new(backend);

        let envelope = service.login(&request("validUser1", "Passw0rd!")).await.unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("bad creds"));
    }

    #[tokio::test]
    async fn invalid_username_never_reaches_backend() {
        let backend = FakeBackend::replying(Ok(LoginResponse::authenticated("abc")));
        let service = LoginService::new(backend.clone());

        let err = service.login(&request("ab", "Passw0rd!")).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::ValidationFailure(ValidationError::BadUsername)
        ));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let backend = FakeBackend::replying(Ok(LoginResponse::authenticated("abc")));
        let service = LoginService::new(backend.clone());

        let err = service.login(&request("validUser1", "short1")).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::ValidationFailure(ValidationError::BadPassword)
        ));
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn backend_failure_is_contained() {
        let backend = FakeBackend::replying(Err(BackendError::Timeout));
        let service = LoginService::new(backend);

        let err = service.login(&request("validUser1", "Passw0rd!")).await.unwrap_err();
        assert!(matches!(err, AppError::BackendUnavailable(_)));
    }
}
