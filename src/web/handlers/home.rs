//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, extract::State, response::IntoResponse};

use crate::domain::entities::Identity;
use crate::state::AppState;

/// Template for the home page of a signed-in user.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub app_root: String,
    pub user_name: String,
    pub tenancy_name: Option<String>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Authentication
///
/// Requires a session; [`crate::web::middleware::web_auth`] inserts the
/// [`Identity`] this handler greets.
pub async fn home_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> impl IntoResponse {
    HomeTemplate {
        app_root: state.account_service.app_root().to_string(),
        user_name: identity.user_name,
        tenancy_name: identity.tenancy_name,
    }
}
