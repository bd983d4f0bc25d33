//! Web-specific middleware.
//!
//! - [`web_auth`] - Session check for protected pages
//! - [`audit`] - Marks responses that must stay out of the access log
//! - [`access_log`] - One line per request, skipping audit-exempt actions
//! - [`rate_limit`] - Per-IP token bucket limits
//! - [`tracing`] - Request/response spans

pub mod access_log;
pub mod audit;
pub mod rate_limit;
pub mod tracing;
pub mod web_auth;
