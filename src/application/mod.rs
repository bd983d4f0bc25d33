//! Application layer services implementing the login flow.
//!
//! Services consume the domain ports and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Login form, login submission and logout

pub mod services;
