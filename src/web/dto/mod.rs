//! Data Transfer Objects for the web endpoints.

pub mod account;
pub mod health;

pub use account::{LoginRequest, LoginResponse, ReturnUrlQuery};
