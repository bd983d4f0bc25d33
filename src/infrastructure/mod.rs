//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`identity`] - HTTP client for the identity service
//! - [`session`] - Signed-cookie session authenticator
//! - [`tenancy`] - Static multi-tenancy settings

pub mod identity;
pub mod session;
pub mod tenancy;
