//! Identity service client.
//!
//! Provides [`RemoteLoginManager`], the HTTP adapter behind the
//! [`crate::domain::ports::LoginManager`] port.

mod remote_login_manager;

pub use remote_login_manager::{IdentityError, RemoteLoginManager};
