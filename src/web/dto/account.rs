//! DTOs for the account endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use crate::domain::entities::LoginCredentials;

/// `?returnUrl=` query parameter of the account pages.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnUrlQuery {
    #[serde(default)]
    pub return_url: Option<String>,
}

/// Login form submission.
///
/// Accepted as `application/x-www-form-urlencoded` or JSON, see
/// [`crate::web::extract::LoginForm`]. Missing text fields deserialize as
/// empty strings so the validator can report them per field.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default, alias = "usernameOrEmailAddress")]
    #[validate(
        length(max = 256),
        custom(function = "required", message = "User name or email address is required")
    )]
    pub username_or_email: String,

    #[serde(default)]
    #[validate(
        length(max = 128),
        custom(function = "required", message = "Password is required")
    )]
    pub password: String,

    /// Only the length is checked here; unknown names are reported by the
    /// identity service as "No tenant with name".
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = 64))]
    pub tenancy_name: Option<String>,

    #[serde(default, deserialize_with = "checkbox")]
    pub remember_me: bool,

    #[serde(default)]
    pub return_url: Option<String>,
}

impl LoginRequest {
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials::new(
            self.username_or_email.clone(),
            self.password.clone(),
            self.tenancy_name.clone(),
        )
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username_or_email", &self.username_or_email)
            .field("password", &"***")
            .field("tenancy_name", &self.tenancy_name)
            .field("remember_me", &self.remember_me)
            .field("return_url", &self.return_url)
            .finish()
    }
}

/// Successful login response. The client navigates to `targetUrl` itself.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub target_url: String,
}

/// Rejects empty and whitespace-only values.
fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// HTML checkboxes post `on`; JSON clients post a bool.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Checkbox {
        Bool(bool),
        Text(String),
    }

    Ok(match Checkbox::deserialize(deserializer)? {
        Checkbox::Bool(value) => value,
        Checkbox::Text(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "on" | "1"
        ),
    })
}
