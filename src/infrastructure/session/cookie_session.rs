//! Signed-cookie session authenticator.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::Sha256;

use crate::domain::entities::Identity;
use crate::domain::ports::SessionAuthenticator;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Cookie names and attributes used for sessions.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub external_cookie_name: String,
    /// Cookie `Path`, normally the application root.
    pub path: String,
    pub secure: bool,
    pub lifetime: Duration,
}

/// Contents of the session cookie before signing.
#[derive(Debug, Serialize, Deserialize)]
struct SessionTicket {
    sid: String,
    identity: Identity,
    persistent: bool,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Keeps the session in a self-contained, HMAC-SHA256 signed cookie.
///
/// # Cookie Format
///
/// ```text
/// account_session=<base64url(ticket json)>.<hex(hmac-sha256)>
/// ```
///
/// The signing secret never leaves the server, so a client can read its own
/// ticket but cannot forge or extend one. Persistent sessions carry a
/// `Max-Age`; the others end with the browser session. Both expire server-side
/// after [`SessionSettings::lifetime`].
pub struct CookieSessionAuthenticator {
    settings: SessionSettings,
    signing_secret: String,
}

impl CookieSessionAuthenticator {
    pub fn new(settings: SessionSettings, signing_secret: String) -> Self {
        Self {
            settings,
            signing_secret,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn encode_ticket(&self, ticket: &SessionTicket) -> Result<String, AppError> {
        let json = serde_json::to_vec(ticket).map_err(|e| {
            tracing::error!("Failed to encode session ticket: {}", e);
            AppError::internal("Failed to issue session", json!({}))
        })?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = self.sign(&payload);

        Ok(format!("{payload}.{signature}"))
    }

    fn decode_ticket(&self, value: &str) -> Option<SessionTicket> {
        let (payload, signature) = value.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&json).ok()
    }

    fn removal(&self, name: &str) -> Cookie<'static> {
        Cookie::build((name.to_string(), ""))
            .path(self.settings.path.clone())
            .build()
    }
}

fn new_session_id() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

impl SessionAuthenticator for CookieSessionAuthenticator {
    fn clear_external_session(&self, jar: CookieJar) -> CookieJar {
        jar.remove(self.removal(&self.settings.external_cookie_name))
    }

    fn sign_in(
        &self,
        jar: CookieJar,
        identity: &Identity,
        persistent: bool,
    ) -> Result<CookieJar, AppError> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.settings.lifetime)
            .ok_or_else(|| {
                tracing::error!(
                    lifetime_seconds = self.settings.lifetime.num_seconds(),
                    "Session lifetime overflows the ticket expiry"
                );
                AppError::internal("Failed to issue session", json!({}))
            })?;
        let ticket = SessionTicket {
            sid: new_session_id(),
            identity: identity.clone(),
            persistent,
            issued_at,
            expires_at,
        };

        let mut cookie = Cookie::new(self.settings.cookie_name.clone(), self.encode_ticket(&ticket)?);
        cookie.set_path(self.settings.path.clone());
        cookie.set_http_only(true);
        cookie.set_secure(self.settings.secure);
        cookie.set_same_site(SameSite::Lax);
        if persistent {
            cookie.set_max_age(time::Duration::seconds(
                self.settings.lifetime.num_seconds(),
            ));
        }

        Ok(jar.add(cookie))
    }

    fn sign_out(&self, jar: CookieJar) -> CookieJar {
        jar.remove(self.removal(&self.settings.cookie_name))
            .remove(self.removal(&self.settings.external_cookie_name))
    }

    fn current(&self, jar: &CookieJar) -> Option<Identity> {
        let cookie = jar.get(&self.settings.cookie_name)?;
        let ticket = self.decode_ticket(cookie.value())?;

        if ticket.expires_at <= Utc::now() {
            tracing::debug!(sid = %ticket.sid, "Session ticket expired");
            return None;
        }

        Some(ticket.identity)
    }
}
