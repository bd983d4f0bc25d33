//! CLI administration tool for account-login.
//!
//! Provides commands for checking the configuration and the identity service
//! without going through the browser.
//!
//! # Usage
//!
//! ```bash
//! # Validate and print the configuration
//! cargo run --bin admin -- config
//!
//! # Check that the identity service answers
//! cargo run --bin admin -- identity check
//!
//! # Try a login and see which message the login page would show
//! cargo run --bin admin -- identity login --user alice --tenant Acme
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`account_login::config`].

use account_login::application::services::account_service::check_outcome;
use account_login::config::{self, Config};
use account_login::domain::entities::LoginCredentials;
use account_login::domain::ports::LoginManager;
use account_login::infrastructure::identity::RemoteLoginManager;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use std::time::Duration;

/// CLI tool for managing account-login.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Validate and print the configuration
    Config,

    /// Identity service operations
    Identity {
        #[command(subcommand)]
        action: IdentityAction,
    },
}

/// Identity service subcommands.
#[derive(Subcommand)]
enum IdentityAction {
    /// Check identity service reachability
    Check,

    /// Attempt a login without issuing a session
    Login {
        /// User name or email address
        #[arg(short, long)]
        user: Option<String>,

        /// Tenancy name (omit for host users)
        #[arg(short, long)]
        tenant: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Config => show_config(&config),
        Commands::Identity { action } => handle_identity_action(action, &config).await?,
    }

    Ok(())
}

/// Prints the configuration with secrets hidden.
fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  Listen:           {}", config.listen_addr.cyan());
    println!("  Application root: {}", config.app_root.cyan());
    println!("  Identity service: {}", config.identity_service_url.cyan());
    println!(
        "  Timeout:          {}",
        format!("{}s", config.identity_timeout_seconds).cyan()
    );
    println!(
        "  Multi-tenancy:    {}",
        if config.multi_tenancy_enabled {
            "enabled".green()
        } else {
            "disabled".bright_black()
        }
    );
    println!("  Session cookie:   {}", config.session_cookie_name.cyan());
    println!("  External cookie:  {}", config.external_cookie_name.cyan());
    println!(
        "  Session lifetime: {}",
        format!("{}h", config.session_lifetime_hours).cyan()
    );
    println!(
        "  Secure cookies:   {}",
        if config.secure_cookies {
            "yes".green()
        } else {
            "no".yellow()
        }
    );
    println!();
    println!("{}", "✅ Configuration is valid".green().bold());
}

/// Dispatches identity service commands.
async fn handle_identity_action(action: IdentityAction, config: &Config) -> Result<()> {
    let manager = RemoteLoginManager::new(
        &config.identity_service_url,
        Duration::from_secs(config.identity_timeout_seconds),
    )
    .context("Failed to create identity service client")?;

    match action {
        IdentityAction::Check => check_identity(&manager).await,
        IdentityAction::Login { user, tenant } => try_login(&manager, user, tenant).await?,
    }

    Ok(())
}

/// Calls the identity service health endpoint.
async fn check_identity(manager: &RemoteLoginManager) {
    println!("{}", "🔍 Checking identity service...".bright_blue());

    if manager.health_check().await {
        println!("{}", "✅ Identity service is reachable".green().bold());
    } else {
        println!("{}", "❌ Identity service is not reachable".red().bold());
    }
}

/// Attempts a login and prints the outcome.
///
/// # Flow
///
/// 1. Prompt for user name (or use provided)
/// 2. Prompt for the password (hidden input)
/// 3. Ask the identity service
/// 4. Print the outcome and the message the login page would display
///
/// No session cookie is issued.
async fn try_login(
    manager: &RemoteLoginManager,
    user: Option<String>,
    tenant: Option<String>,
) -> Result<()> {
    println!("{}", "🔑 Test Login".bright_blue().bold());
    println!();

    let user = match user {
        Some(u) => u,
        None => Input::new()
            .with_prompt("User name or email")
            .interact_text()?,
    };

    let password = Password::new().with_prompt("Password").interact()?;

    let credentials = LoginCredentials::new(user, password, tenant);

    let outcome = manager
        .login(&credentials)
        .await
        .map_err(|e| anyhow::anyhow!("Login request failed: {}", e))?;

    println!();
    println!("  Outcome: {}", outcome.kind().bright_white().bold());

    match check_outcome(outcome) {
        Ok(identity) => {
            println!("  User ID: {}", identity.user_id.to_string().cyan());
            println!("  User:    {}", identity.user_name.cyan());
            if let Some(tenancy_name) = identity.tenancy_name {
                println!("  Tenant:  {}", tenancy_name.cyan());
            }
            println!();
            println!("{}", "✅ Login would succeed".green().bold());
        }
        Err(err) => {
            println!("  Message: {}", err.to_string().yellow());
            println!();
            println!("{}", "❌ Login would be rejected".red().bold());
        }
    }

    println!();

    Ok(())
}
