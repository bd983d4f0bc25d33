//! Port for issuing and clearing the authenticated session.

use axum_extra::extract::cookie::CookieJar;

use crate::domain::entities::Identity;
use crate::error::AppError;

/// Establishes and clears sessions on the response cookie jar.
///
/// Every method takes the jar extracted from the request and returns the jar
/// to be sent back, so the `Set-Cookie` headers travel with the handler's
/// response.
#[cfg_attr(test, mockall::automock)]
pub trait SessionAuthenticator: Send + Sync {
    /// Drops the marker left by an external login provider, if any.
    fn clear_external_session(&self, jar: CookieJar) -> CookieJar;

    /// Issues a session for `identity`.
    ///
    /// A `persistent` session survives browser restarts until it expires.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the session ticket cannot be encoded.
    fn sign_in(
        &self,
        jar: CookieJar,
        identity: &Identity,
        persistent: bool,
    ) -> Result<CookieJar, AppError>;

    /// Clears the session and the external marker. Safe to call without a session.
    fn sign_out(&self, jar: CookieJar) -> CookieJar;

    /// Returns the identity of a valid, unexpired session carried by `jar`.
    fn current(&self, jar: &CookieJar) -> Option<Identity>;
}
