//! Domain entities for the login flow.

pub mod credentials;
pub mod identity;
pub mod login_outcome;

pub use credentials::LoginCredentials;
pub use identity::Identity;
pub use login_outcome::{CredentialFault, LoginOutcome, LoginResultCode};
