//! Port for credential verification.

use async_trait::async_trait;

use crate::domain::entities::{LoginCredentials, LoginOutcome};
use crate::error::AppError;

/// Verifies credentials against the identity store.
///
/// Implementations resolve the tenancy, check the password and the account
/// state, and report the result as a [`LoginOutcome`]. Rejections are outcomes,
/// not errors: `Err` is reserved for failures to reach the identity store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginManager: Send + Sync {
    /// Attempts a login with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the identity store is unreachable or
    /// answers with something that is not a login result.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, AppError>;

    /// Returns `true` when the identity store answers its health check.
    async fn health_check(&self) -> bool;
}
