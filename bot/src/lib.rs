//! Monthly emoji ranking bot: configuration, bootstrap, and scheduling.

pub mod config;
pub mod scheduler;

use tracing_subscriber::EnvFilter;

use config::AppConfig;
use slack_client::SlackApiClient;

/// Install the fmt subscriber. `RUST_LOG` wins; otherwise `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load `.env` and build the runtime config.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();
    let config = AppConfig::load()?;
    tracing::info!(?config, "Configuration loaded");
    Ok(config)
}

pub fn build_client(config: &AppConfig) -> Result<SlackApiClient, anyhow::Error> {
    let client = SlackApiClient::with_options(
        config.bot_token.clone(),
        &config.api_base,
        config.http_timeout(),
    )?;
    Ok(client)
}

/// Run one ranking and publish it. Returns the posted report.
pub async fn run_once(
    config: &AppConfig,
    client: &SlackApiClient,
) -> Result<String, anyhow::Error> {
    let report = emoji_ranking::run_ranking_and_publish(
        client,
        &config.publish_target(),
        config.ranking_options(),
    )
    .await?;
    Ok(report)
}
