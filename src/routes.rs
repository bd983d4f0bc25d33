//! Top-level router configuration.
//!
//! # Route Structure
//!
//! All paths are relative to the application root (`APP_ROOT`).
//!
//! - `GET  /`                - Home page (session required)
//! - `GET  /Account/Login`   - Login form
//! - `POST /Account/Login`   - Login submission
//! - `*    /Account/Logout`  - Sign out
//! - `GET  /health`          - Health check
//! - `/static/*`             - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response spans
//! - **Access log** - One line per request, audit-exempt actions skipped
//! - **Rate limiting** - Per-IP token bucket, stricter on account actions
//! - **Authentication** - Session cookie on protected pages
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{access_log, rate_limit, tracing, web_auth};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
///
/// Routes are nested under the application root of the account service when
/// it is not `/`. The router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()` for rate limiting.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let web_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::layer());

    let account = web::routes::account_routes().layer(rate_limit::account_layer());

    let site = Router::new()
        .merge(web_protected)
        .merge(account)
        .merge(web::routes::public_routes())
        .nest_service("/static", ServeDir::new("static"));

    let mount = state.account_service.app_root().trim_end_matches('/').to_string();
    let site = if mount.is_empty() {
        site
    } else {
        Router::new().nest(&mount, site)
    };

    let router = site
        .with_state(state)
        .layer(middleware::from_fn(access_log::layer))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
