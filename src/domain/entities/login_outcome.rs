//! Login outcome and the result codes reported by the identity service.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::{Identity, LoginCredentials};

/// Which half of the credentials was rejected.
///
/// Both faults produce the same user-facing message so a caller cannot test
/// for existing accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFault {
    UnknownUser,
    WrongPassword,
}

/// Result of a login attempt.
///
/// Only [`LoginOutcome::Success`] may ever lead to a session being issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(Identity),
    InvalidCredentials(CredentialFault),
    /// Carries the tenancy name the user asked for.
    InvalidTenancy(String),
    TenantInactive(String),
    /// Carries the user name or email the user logged in with.
    UserInactive(String),
    EmailUnconfirmed,
    /// A result code this service does not know about yet.
    Unknown(String),
}

impl LoginOutcome {
    /// Builds an outcome from a result code reported by the identity service.
    ///
    /// Names carried by rejection variants are taken from the submitted
    /// credentials. Returns `None` for a `Success` code without an identity.
    pub fn from_code(
        code: LoginResultCode,
        identity: Option<Identity>,
        credentials: &LoginCredentials,
    ) -> Option<Self> {
        let tenancy_name = || credentials.tenancy_name.clone().unwrap_or_default();

        let outcome = match code {
            LoginResultCode::Success => Self::Success(identity?),
            LoginResultCode::InvalidUserNameOrEmailAddress => {
                Self::InvalidCredentials(CredentialFault::UnknownUser)
            }
            LoginResultCode::InvalidPassword => {
                Self::InvalidCredentials(CredentialFault::WrongPassword)
            }
            LoginResultCode::InvalidTenancyName => Self::InvalidTenancy(tenancy_name()),
            LoginResultCode::TenantIsNotActive => Self::TenantInactive(tenancy_name()),
            LoginResultCode::UserIsNotActive => {
                Self::UserInactive(credentials.username_or_email.clone())
            }
            LoginResultCode::UserEmailIsNotConfirmed => Self::EmailUnconfirmed,
            LoginResultCode::Other(code) => Self::Unknown(code),
        };

        Some(outcome)
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::InvalidCredentials(_) => "invalid_credentials",
            Self::InvalidTenancy(_) => "invalid_tenancy",
            Self::TenantInactive(_) => "tenant_inactive",
            Self::UserInactive(_) => "user_inactive",
            Self::EmailUnconfirmed => "email_unconfirmed",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Result code on the identity service wire.
///
/// Unrecognized codes are kept verbatim in [`LoginResultCode::Other`] so newer
/// identity service releases never break deserialization.
#[derive(Debug, Clone, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum LoginResultCode {
    Success,
    InvalidUserNameOrEmailAddress,
    InvalidPassword,
    InvalidTenancyName,
    TenantIsNotActive,
    UserIsNotActive,
    UserEmailIsNotConfirmed,
    Other(String),
}

impl FromStr for LoginResultCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Success" => Self::Success,
            "InvalidUserNameOrEmailAddress" => Self::InvalidUserNameOrEmailAddress,
            "InvalidPassword" => Self::InvalidPassword,
            "InvalidTenancyName" => Self::InvalidTenancyName,
            "TenantIsNotActive" => Self::TenantIsNotActive,
            "UserIsNotActive" => Self::UserIsNotActive,
            "UserEmailIsNotConfirmed" => Self::UserEmailIsNotConfirmed,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for LoginResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Success => "Success",
            Self::InvalidUserNameOrEmailAddress => "InvalidUserNameOrEmailAddress",
            Self::InvalidPassword => "InvalidPassword",
            Self::InvalidTenancyName => "InvalidTenancyName",
            Self::TenantIsNotActive => "TenantIsNotActive",
            Self::UserIsNotActive => "UserIsNotActive",
            Self::UserEmailIsNotConfirmed => "UserEmailIsNotConfirmed",
            Self::Other(code) => code,
        };
        f.write_str(code)
    }
}
