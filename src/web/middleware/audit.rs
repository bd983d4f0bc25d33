//! Audit exemption marker.

use axum::http::Method;
use axum::response::Response;

/// Response extension telling [`super::access_log`] and [`super::tracing`] to
/// skip the request.
///
/// Set on actions that receive credentials, so not even their request line
/// and client address end up in the access log.
#[derive(Debug, Clone, Copy)]
pub struct AuditExempt;

/// Marks a response as audit-exempt.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{handler::Handler, middleware, routing::post};
///
/// post(login_handler.layer(middleware::map_response(audit::exempt)))
/// ```
pub async fn exempt(mut response: Response) -> Response {
    response.extensions_mut().insert(AuditExempt);
    response
}

/// Returns `true` for the login submission, whose response carries [`AuditExempt`].
///
/// Used where only the request is known, such as when a trace span is opened.
/// `path` is the full request path, including the application root.
pub fn is_exempt_request(method: &Method, path: &str) -> bool {
    method == Method::POST && path.trim_end_matches('/').ends_with("/Account/Login")
}
