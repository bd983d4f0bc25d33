//! HTTP server initialization and runtime setup.
//!
//! Builds the collaborators of the login controller and runs the Axum server
//! until Ctrl+C / SIGTERM.

use crate::application::services::AccountService;
use crate::config::Config;
use crate::infrastructure::identity::RemoteLoginManager;
use crate::infrastructure::session::{CookieSessionAuthenticator, SessionSettings};
use crate::infrastructure::tenancy::StaticTenancyConfig;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the identity service client cannot be created or the
/// session lifetime does not fit a [`chrono::TimeDelta`].
pub fn build_state(config: &Config) -> Result<AppState> {
    let lifetime = chrono::TimeDelta::try_hours(config.session_lifetime_hours)
        .context("SESSION_LIFETIME_HOURS is out of range")?;

    let login_manager = RemoteLoginManager::new(
        &config.identity_service_url,
        Duration::from_secs(config.identity_timeout_seconds),
    )
    .context("Failed to create identity service client")?;

    let sessions = CookieSessionAuthenticator::new(
        SessionSettings {
            cookie_name: config.session_cookie_name.clone(),
            external_cookie_name: config.external_cookie_name.clone(),
            path: config.app_root.clone(),
            secure: config.secure_cookies,
            lifetime,
        },
        config.session_signing_secret.clone(),
    );

    let account_service = AccountService::new(
        Arc::new(login_manager),
        Arc::new(StaticTenancyConfig::new(config.multi_tenancy_enabled)),
        Arc::new(sessions),
        config.app_root.clone(),
    );

    Ok(AppState::new(Arc::new(account_service)))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The identity service client cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    if !state.account_service.identity_service_healthy().await {
        tracing::warn!("Identity service is not reachable yet; logins will fail until it is");
    }

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}{}", config.app_root);

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
