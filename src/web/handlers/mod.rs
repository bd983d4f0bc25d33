//! Handlers for the account pages, the home page and the health check.

mod account;
mod health;
mod home;

pub use account::{LoginTemplate, login_form_handler, login_handler, logout_handler};
pub use health::health_handler;
pub use home::{HomeTemplate, home_handler};
