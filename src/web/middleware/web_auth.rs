//! Session authentication middleware for protected pages.

use axum::{
    extract::{OriginalUri, Request, State},
    middleware::Next,
    response::{Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;

/// Lets requests with a valid session through, redirects the rest to the login form.
///
/// # Authentication Flow
///
/// 1. Read the session cookie via [`crate::domain::ports::SessionAuthenticator::current`]
/// 2. On success, store the [`crate::domain::entities::Identity`] as a request
///    extension and continue to the handler
/// 3. Otherwise redirect to `{root}Account/Login?returnUrl=<requested path>`
///
/// Unlike an API guard returning `401 Unauthorized`, this middleware redirects
/// so a browser lands on the login page and comes back afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/", get(home_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    match st.account_service.current_identity(&jar) {
        Some(identity) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        None => {
            let requested = req
                .extensions()
                .get::<OriginalUri>()
                .map(|OriginalUri(uri)| uri.to_string())
                .unwrap_or_else(|| req.uri().to_string());

            Err(Redirect::to(&login_redirect(
                &st.account_service.login_path(),
                &requested,
            )))
        }
    }
}

/// Builds the login URL that brings the user back to `requested` afterwards.
fn login_redirect(login_path: &str, requested: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(requested.as_bytes()).collect();
    format!("{login_path}?returnUrl={encoded}")
}
