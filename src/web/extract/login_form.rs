//! Body extractor accepting either a form post or JSON.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Deserializes the body as JSON when the request says so, otherwise as
/// `application/x-www-form-urlencoded`.
///
/// The login page posts the form with a script, while plain HTML forms and
/// other clients may post it directly; both arrive here. Rejections become
/// [`AppError::Validation`] with the same message as a failed field check.
/// The rejection body is not logged because it may echo submitted values.
pub struct LoginForm<T>(pub T);

impl<S, T> FromRequest<S> for LoginForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let value = if is_json {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| value)
                .map_err(|_| malformed())?
        } else {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| value)
                .map_err(|_| malformed())?
        };

        Ok(LoginForm(value))
    }
}

fn malformed() -> AppError {
    AppError::bad_request(
        "Your form is invalid!",
        json!({ "reason": "Malformed request body" }),
    )
}
