//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    health_handler, home_handler, login_form_handler, login_handler, logout_handler,
};
use crate::web::middleware::audit;
use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::get,
};

/// Account actions, reachable without a session.
///
/// # Endpoints
///
/// - `GET  /Account/Login`  - Login form
/// - `POST /Account/Login`  - Login submission (audit-exempt)
/// - `GET  /Account/Logout` - Sign out, redirect to the login form
/// - `POST /Account/Logout` - Same as `GET`
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/Account/Login",
            get(login_form_handler)
                .post(login_handler.layer(middleware::map_response(audit::exempt))),
        )
        .route("/Account/Logout", get(logout_handler).post(logout_handler))
}

/// Pages requiring a session.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /` - Home page of the signed-in user
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

/// Public operational routes.
///
/// # Endpoints
///
/// - `GET /health` - Identity service reachability
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
