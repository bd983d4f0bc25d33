//! Credentials submitted for a login attempt.

use std::fmt;

/// Credentials handed to a [`crate::domain::ports::LoginManager`].
///
/// `Debug` output never contains the password.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username_or_email: String,
    pub password: String,
    /// Tenant scope of the login; `None` logs in as a host user.
    pub tenancy_name: Option<String>,
}

impl LoginCredentials {
    pub fn new(
        username_or_email: impl Into<String>,
        password: impl Into<String>,
        tenancy_name: Option<String>,
    ) -> Self {
        Self {
            username_or_email: username_or_email.into(),
            password: password.into(),
            tenancy_name: tenancy_name.filter(|name| !name.trim().is_empty()),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username_or_email", &self.username_or_email)
            .field("password", &"***")
            .field("tenancy_name", &self.tenancy_name)
            .finish()
    }
}
