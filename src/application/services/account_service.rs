//! Account service: login form, login submission and logout.

use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::{Identity, LoginCredentials, LoginOutcome};
use crate::domain::ports::{LoginManager, SessionAuthenticator, TenancyConfig};
use crate::error::AppError;

/// Data needed to render the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFormView {
    pub return_url: String,
    pub is_multi_tenancy_enabled: bool,
}

/// Drives the login flow on top of the three collaborator ports.
///
/// The service holds no mutable state. Each call is independent and the
/// [`LoginManager`] call is its only suspension point; failures are surfaced
/// to the caller without retry.
pub struct AccountService {
    login_manager: Arc<dyn LoginManager>,
    tenancy: Arc<dyn TenancyConfig>,
    sessions: Arc<dyn SessionAuthenticator>,
    app_root: String,
}

impl AccountService {
    /// Creates a new account service.
    ///
    /// # Arguments
    ///
    /// - `login_manager` - verifies credentials
    /// - `tenancy` - multi-tenancy settings
    /// - `sessions` - issues and clears the session cookie
    /// - `app_root` - application root path, the default navigation target
    pub fn new(
        login_manager: Arc<dyn LoginManager>,
        tenancy: Arc<dyn TenancyConfig>,
        sessions: Arc<dyn SessionAuthenticator>,
        app_root: impl Into<String>,
    ) -> Self {
        Self {
            login_manager,
            tenancy,
            sessions,
            app_root: app_root.into(),
        }
    }

    pub fn app_root(&self) -> &str {
        &self.app_root
    }

    /// Path of the login form, relative to the host.
    pub fn login_path(&self) -> String {
        format!("{}Account/Login", self.app_root)
    }

    /// Builds the login form view.
    ///
    /// A missing or blank `return_url` becomes the application root.
    pub fn login_form(&self, return_url: Option<&str>) -> LoginFormView {
        LoginFormView {
            return_url: self.effective_return_url(return_url),
            is_multi_tenancy_enabled: self.tenancy.is_multi_tenancy_enabled(),
        }
    }

    /// Processes a login submission.
    ///
    /// On success the external-provider marker is cleared, a session is issued
    /// with `remember_me` as its persistence flag, and the navigation target is
    /// returned together with the updated cookie jar.
    ///
    /// # Errors
    ///
    /// - [`AppError::Auth`] for every rejection reported by the identity service
    /// - [`AppError::UnknownOutcome`] for a result this service does not know
    /// - [`AppError::Internal`] if the identity service cannot be reached
    pub async fn login(
        &self,
        jar: CookieJar,
        credentials: LoginCredentials,
        remember_me: bool,
        return_url: Option<&str>,
    ) -> Result<(CookieJar, String), AppError> {
        let outcome = self.login_manager.login(&credentials).await?;
        let kind = outcome.kind();

        metrics::counter!("login_attempts_total", "outcome" => kind).increment(1);

        // The rejection message echoes submitted names, so only the kind is logged.
        let identity = match check_outcome(outcome) {
            Ok(identity) => identity,
            Err(err) => {
                warn!(outcome = kind, "Login rejected");
                return Err(err);
            }
        };

        let jar = self.sessions.clear_external_session(jar);
        let jar = self.sessions.sign_in(jar, &identity, remember_me)?;

        info!(
            user_id = identity.user_id,
            tenant_id = ?identity.tenant_id,
            persistent = remember_me,
            "User signed in"
        );

        Ok((jar, self.effective_return_url(return_url)))
    }

    /// Clears the current session. Safe to call without one.
    pub fn logout(&self, jar: CookieJar) -> CookieJar {
        if let Some(identity) = self.sessions.current(&jar) {
            info!(user_id = identity.user_id, "User signed out");
        }
        self.sessions.sign_out(jar)
    }

    /// Returns the identity of the session carried by `jar`, if any.
    pub fn current_identity(&self, jar: &CookieJar) -> Option<Identity> {
        self.sessions.current(jar)
    }

    /// Checks that the identity service answers.
    pub async fn identity_service_healthy(&self) -> bool {
        self.login_manager.health_check().await
    }

    fn effective_return_url(&self, return_url: Option<&str>) -> String {
        match return_url {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => self.app_root.clone(),
        }
    }
}

/// Maps a login outcome to the signed-in identity or a user-facing error.
///
/// The `Unknown` arm stays even though every known code has its own arm: the
/// identity service may grow new results before this service learns them.
pub fn check_outcome(outcome: LoginOutcome) -> Result<Identity, AppError> {
    match outcome {
        LoginOutcome::Success(identity) => Ok(identity),
        LoginOutcome::InvalidCredentials(fault) => {
            debug!(?fault, "Credentials rejected");
            Err(AppError::auth("Invalid user name or password!"))
        }
        LoginOutcome::InvalidTenancy(name) => {
            Err(AppError::auth(format!("No tenant with name: {name}")))
        }
        LoginOutcome::TenantInactive(name) => {
            Err(AppError::auth(format!("Tenant is not active: {name}")))
        }
        LoginOutcome::UserInactive(user) => {
            Err(AppError::auth(format!("User is not active: {user}")))
        }
        LoginOutcome::EmailUnconfirmed => {
            Err(AppError::auth("Your email address is not confirmed!"))
        }
        LoginOutcome::Unknown(code) => Err(AppError::unknown_outcome(
            format!("Unknown problem with login: {code}"),
            json!({ "code": code }),
        )),
    }
}
