//! Domain layer containing the login entities and collaborator ports.
//!
//! # Architecture
//!
//! - [`entities`] - Credentials, identities and the tagged login outcome
//! - [`ports`] - Trait definitions for the login controller's collaborators
//!
//! # Design Principles
//!
//! - The domain layer knows nothing about HTTP clients or cookie signing
//! - Port traits define contracts implemented by the infrastructure layer
//! - Outcome mapping lives in [`crate::application::services::AccountService`]
//!
//! # Login Flow
//!
//! 1. A handler builds [`entities::LoginCredentials`] from the submitted form
//! 2. [`ports::LoginManager`] reports an [`entities::LoginOutcome`]
//! 3. On success, [`ports::SessionAuthenticator`] issues the session cookie

pub mod entities;
pub mod ports;
