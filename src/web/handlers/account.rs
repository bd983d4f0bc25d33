//! Account handlers: login form, login submission and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::{LoginRequest, LoginResponse, ReturnUrlQuery};
use crate::web::extract::LoginForm;

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - User name or email and password inputs
/// - Tenancy name input when multi-tenancy is enabled
/// - Remember-me checkbox
/// - Hidden `returnUrl` field
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub app_root: String,
    pub return_url: String,
    pub is_multi_tenancy_enabled: bool,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /Account/Login?returnUrl=/reports`
///
/// A missing or blank `returnUrl` is replaced by the application root.
pub async fn login_form_handler(
    State(state): State<AppState>,
    Query(query): Query<ReturnUrlQuery>,
) -> impl IntoResponse {
    let view = state
        .account_service
        .login_form(query.return_url.as_deref());

    LoginTemplate {
        app_root: state.account_service.app_root().to_string(),
        return_url: view.return_url,
        is_multi_tenancy_enabled: view.is_multi_tenancy_enabled,
    }
}

/// Processes a login submission.
///
/// # Endpoint
///
/// `POST /Account/Login`
///
/// # Request Body
///
/// Form-encoded or JSON:
///
/// ```json
/// {
///   "usernameOrEmail": "alice",
///   "password": "secret",
///   "tenancyName": "Acme",
///   "rememberMe": true,
///   "returnUrl": "/reports"
/// }
/// ```
///
/// `returnUrl` may also be passed in the query string; the body wins.
///
/// # Response
///
/// ```json
/// { "targetUrl": "/reports" }
/// ```
///
/// The response also carries the session cookie. The page script navigates to
/// `targetUrl`; no HTTP redirect is sent.
///
/// # Errors
///
/// - 400 `validation_error` "Your form is invalid!"
/// - 401 `auth_error` with one of the login rejection messages
/// - 401 `unknown_login_outcome` "Unknown problem with login: {code}"
/// - 500 `internal_error` if the identity service is unreachable
///
/// # Auditing
///
/// Routed behind [`crate::web::middleware::audit::exempt`]; the submitted
/// values are never logged.
pub async fn login_handler(
    State(state): State<AppState>,
    Query(query): Query<ReturnUrlQuery>,
    jar: CookieJar,
    LoginForm(payload): LoginForm<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    payload.validate()?;

    let return_url = payload
        .return_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .or(query.return_url.as_deref());

    let (jar, target_url) = state
        .account_service
        .login(jar, payload.credentials(), payload.remember_me, return_url)
        .await?;

    Ok((jar, Json(LoginResponse { target_url })))
}

/// Signs the user out and redirects to the login page.
///
/// # Endpoint
///
/// `GET /Account/Logout` or `POST /Account/Logout`
///
/// Always answers `303 See Other` to `{root}Account/Login`, with or without an
/// active session.
pub async fn logout_handler(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = state.account_service.logout(jar);

    (jar, Redirect::to(&state.account_service.login_path()))
}
