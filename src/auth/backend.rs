//! Client du service d'authentification externe.
//!
//! Un seul appel `POST` par requête entrante, sans retry ni cache.
//! Le corps de la réponse est interprété en JSON quel que soit le statut HTTP.

use std::time::Duration;

use async_trait::async_trait;
use login_proxy_api::LoginResponse;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use super::validation::Credentials;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend request failed: {0}")]
    Network(String),
    #[error("Backend timed out")]
    Timeout,
    #[error("Backend reply is not valid JSON: {0}")]
    InvalidReply(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_decode() {
            BackendError::InvalidReply(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

/// Réponse du backend réduite aux trois champs relayés.
/// Tout autre champ est ignoré à la désérialisation.
#[derive(Debug, Deserialize)]
struct BackendReply {
    success: bool,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl From<BackendReply> for LoginResponse {
    fn from(reply: BackendReply) -> Self {
        Self {
            success: reply.success,
            token: reply.token,
            message: reply.message,
        }
    }
}

/// Adresse du backend et secret optionnel, fournis par la configuration
#[derive(Clone)]
pub struct BackendEndpoint {
    pub url: Url,
    pub secret: Option<String>,
}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Transmet les identifiants nettoyés et renvoie l'enveloppe minimisée
    async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, BackendError>;
}

#[derive(Clone)]
pub struct HttpAuthBackend {
    endpoint: BackendEndpoint,
    client: reqwest::Client,
}

impl HttpAuthBackend {
    pub fn new(endpoint: BackendEndpoint, timeout: Duration) -> Result<Self, BackendError> {
        // Une redirection renverrait les identifiants vers un autre hôte
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(BackendError::from)?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, BackendError> {
        let mut request = self.client.post(self.endpoint.url.clone()).json(credentials);
        if let Some(secret) = &self.endpoint.secret {
            request = request.bearer_auth(secret);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(%status, "Backend replied");

        let body = response.bytes().await?;
        let reply: BackendReply = serde_json::from_slice(&body)
            .map_err(|e| BackendError::InvalidReply(e.to_string()))?;

        Ok(reply.into())
    }
}
