//! Port traits for the collaborators of the login controller.
//!
//! The controller never talks to the identity store, the tenancy settings or
//! the cookie middleware directly. It receives one implementation of each
//! trait at construction time.
//!
//! # Implementations
//!
//! - [`LoginManager`] - [`crate::infrastructure::identity::RemoteLoginManager`]
//! - [`TenancyConfig`] - [`crate::infrastructure::tenancy::StaticTenancyConfig`]
//! - [`SessionAuthenticator`] - [`crate::infrastructure::session::CookieSessionAuthenticator`]
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod login_manager;
pub mod session_authenticator;
pub mod tenancy_config;

pub use login_manager::LoginManager;
pub use session_authenticator::SessionAuthenticator;
pub use tenancy_config::TenancyConfig;

#[cfg(test)]
pub use login_manager::MockLoginManager;
#[cfg(test)]
pub use session_authenticator::MockSessionAuthenticator;
#[cfg(test)]
pub use tenancy_config::MockTenancyConfig;
