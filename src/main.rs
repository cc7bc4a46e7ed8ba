use std::sync::Arc;

use anyhow::{Context, Result};
use contact_relay::config::Config;
use contact_relay::mail::SmtpMailer;
use contact_relay::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contact_relay=info".parse()?),
        )
        .init();

    info!("Starting contact relay");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "SMTP relay {}:{} as {} (development: {})",
        config.smtp_host, config.smtp_port, config.smtp_user, config.development
    );

    let mailer = SmtpMailer::from_config(&config).context("Failed to set up SMTP transport")?;

    server::serve(AppState::new(config, Arc::new(mailer))).await
}
