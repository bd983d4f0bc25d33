//! HTTP client for the external identity service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use url::Url;

use crate::domain::entities::{Identity, LoginCredentials, LoginOutcome, LoginResultCode};
use crate::domain::ports::LoginManager;
use crate::error::AppError;

/// Errors talking to the identity service.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid identity service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("identity service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("identity service answered with status {0}")]
    Status(u16),
    #[error("identity service reported success without an identity")]
    MissingIdentity,
}

impl From<IdentityError> for AppError {
    fn from(e: IdentityError) -> Self {
        tracing::error!("Identity service error: {}", e);
        AppError::internal("Identity service unavailable", json!({}))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginWireRequest<'a> {
    username_or_email_address: &'a str,
    password: &'a str,
    tenancy_name: Option<&'a str>,
}

#[derive(Deserialize)]
struct LoginWireResponse {
    result: LoginResultCode,
    #[serde(default)]
    identity: Option<Identity>,
}

/// [`LoginManager`] backed by the identity service HTTP API.
///
/// # Protocol
///
/// ```text
/// POST {base}/login
/// { "usernameOrEmailAddress": "alice", "password": "…", "tenancyName": "Acme" }
///
/// 200 OK
/// { "result": "Success", "identity": { "userId": 1, "userName": "alice", "tenantId": 2, "tenancyName": "Acme" } }
/// { "result": "InvalidPassword" }
/// ```
///
/// A result code this client does not recognize becomes
/// [`LoginOutcome::Unknown`] instead of a decoding error.
///
/// Requests are bounded by the client timeout and never retried.
pub struct RemoteLoginManager {
    client: reqwest::Client,
    login_url: Url,
    health_url: Url,
}

impl RemoteLoginManager {
    /// Creates a client for the identity service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidUrl`] if `base_url` does not parse and
    /// [`IdentityError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, IdentityError> {
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            login_url: base.join("login")?,
            health_url: base.join("health")?,
        })
    }

    async fn request_login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<LoginOutcome, IdentityError> {
        let response = self
            .client
            .post(self.login_url.clone())
            .json(&LoginWireRequest {
                username_or_email_address: &credentials.username_or_email,
                password: &credentials.password,
                tenancy_name: credentials.tenancy_name.as_deref(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::Status(status.as_u16()));
        }

        let body: LoginWireResponse = response.json().await?;

        LoginOutcome::from_code(body.result, body.identity, credentials)
            .ok_or(IdentityError::MissingIdentity)
    }
}

#[async_trait]
impl LoginManager for RemoteLoginManager {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, AppError> {
        Ok(self.request_login(credentials).await?)
    }

    async fn health_check(&self) -> bool {
        match self.client.get(self.health_url.clone()).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Identity service health check failed: {}", e);
                false
            }
        }
    }
}
