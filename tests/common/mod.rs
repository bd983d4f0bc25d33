#![allow(dead_code)]

use account_login::infrastructure::session::{CookieSessionAuthenticator, SessionSettings};
use account_login::infrastructure::tenancy::StaticTenancyConfig;
use account_login::prelude::*;
use account_login::web::middleware::web_auth;
use account_login::web::routes::{account_routes, protected_routes, public_routes};
use async_trait::async_trait;
use axum::{Router, middleware};
use axum_extra::extract::cookie::CookieJar;
use axum_test::TestServer;
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

pub const SESSION_COOKIE: &str = "account_session";
pub const EXTERNAL_COOKIE: &str = "account_external";

const SIGNING_SECRET: &str = "integration-test-signing-secret-0123456789";

/// Identity service stand-in answering every login with the same outcome.
pub struct FakeLoginManager {
    outcome: Option<LoginOutcome>,
    calls: Mutex<Vec<LoginCredentials>>,
}

impl FakeLoginManager {
    pub fn returning(outcome: LoginOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behaves like an unreachable identity service.
    pub fn unavailable() -> Self {
        Self {
            outcome: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<LoginCredentials> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LoginManager for FakeLoginManager {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, AppError> {
        self.calls.lock().unwrap().push(credentials.clone());

        self.outcome
            .clone()
            .ok_or_else(|| AppError::internal("Identity service unavailable", json!({})))
    }

    async fn health_check(&self) -> bool {
        self.outcome.is_some()
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub login_manager: Arc<FakeLoginManager>,
    pub sessions: Arc<CookieSessionAuthenticator>,
}

impl TestApp {
    /// Signs `identity` in directly and returns a `Cookie` header value carrying the session.
    pub fn session_header(&self, identity: &Identity) -> String {
        let jar = self
            .sessions
            .sign_in(CookieJar::new(), identity, false)
            .unwrap();
        let cookie = jar.get(SESSION_COOKIE).unwrap();

        format!("{}={}", cookie.name(), cookie.value())
    }
}

pub fn alice() -> Identity {
    Identity {
        user_id: 7,
        user_name: "alice".to_string(),
        tenant_id: Some(3),
        tenancy_name: Some("Acme".to_string()),
    }
}

pub fn session_settings(app_root: &str) -> SessionSettings {
    SessionSettings {
        cookie_name: SESSION_COOKIE.to_string(),
        external_cookie_name: EXTERNAL_COOKIE.to_string(),
        path: app_root.to_string(),
        secure: false,
        lifetime: chrono::Duration::hours(2),
    }
}

pub fn create_sessions(app_root: &str) -> Arc<CookieSessionAuthenticator> {
    Arc::new(CookieSessionAuthenticator::new(
        session_settings(app_root),
        SIGNING_SECRET.to_string(),
    ))
}

pub fn create_test_state(
    login_manager: Arc<FakeLoginManager>,
    sessions: Arc<CookieSessionAuthenticator>,
    multi_tenancy_enabled: bool,
    app_root: &str,
) -> AppState {
    let account_service = AccountService::new(
        login_manager,
        Arc::new(StaticTenancyConfig::new(multi_tenancy_enabled)),
        sessions,
        app_root,
    );

    AppState::new(Arc::new(account_service))
}

/// Builds the web routes without rate limiting, which needs a peer address.
pub fn spawn_app(login_manager: FakeLoginManager, multi_tenancy_enabled: bool) -> TestApp {
    let login_manager = Arc::new(login_manager);
    let sessions = create_sessions("/");
    let state = create_test_state(
        login_manager.clone(),
        sessions.clone(),
        multi_tenancy_enabled,
        "/",
    );

    let protected = protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    let app = Router::new()
        .merge(protected)
        .merge(account_routes())
        .merge(public_routes())
        .with_state(state);

    TestApp {
        server: TestServer::new(app).unwrap(),
        login_manager,
        sessions,
    }
}

pub fn cookie_header(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Captures `DEBUG` and above on the current thread until the guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
