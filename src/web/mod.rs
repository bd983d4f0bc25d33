//! Web layer for the browser-facing account pages.
//!
//! Uses Askama templates for server-side rendering; the login form itself is
//! submitted by `static/js/login.js`, which follows the returned `targetUrl`.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Form-or-JSON body extractor
//! - [`handlers`] - Account, home and health handlers
//! - [`middleware`] - Session check, audit exemption, access log, rate limits, tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
