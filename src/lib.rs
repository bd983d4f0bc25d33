//! # Account Login
//!
//! The account controller of a multi-tenant web application: renders the
//! login form, processes login submissions and signs users out.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Login outcome, credentials and collaborator ports
//! - **Application Layer** ([`application`]) - Outcome mapping and session orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Identity service client, signed cookies
//! - **Web Layer** ([`web`]) - Handlers, templates, DTOs and middleware
//!
//! ## Features
//!
//! - Login against an external identity service, optionally scoped to a tenant
//! - Fixed, user-facing messages for every login rejection
//! - HMAC-signed session cookies with optional remember-me persistence
//! - Credentials kept out of every log
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export IDENTITY_SERVICE_URL="http://localhost:8080"
//! export SESSION_SIGNING_SECRET="$(openssl rand -hex 32)"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

#[cfg(test)]
mod testing;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccountService, LoginFormView};
    pub use crate::domain::entities::{
        CredentialFault, Identity, LoginCredentials, LoginOutcome, LoginResultCode,
    };
    pub use crate::domain::ports::{LoginManager, SessionAuthenticator, TenancyConfig};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
