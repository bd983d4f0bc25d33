//! Session issuance on signed cookies.

mod cookie_session;

pub use cookie_session::{CookieSessionAuthenticator, SessionSettings};
