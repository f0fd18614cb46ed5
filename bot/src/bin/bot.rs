//! Emoji ranking bot binary.
//!
//! `RUN_MODE=once` ranks the trailing month, posts, and exits.
//! `RUN_MODE=schedule` stays up and posts on the configured day each month.

use tokio_util::sync::CancellationToken;

use emoji_ranking_bot_lib::config::RunMode;
use emoji_ranking_bot_lib::scheduler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    emoji_ranking_bot_lib::init_tracing();
    tracing::info!("Starting emoji ranking bot");

    let config = emoji_ranking_bot_lib::init_config()?;
    let client = emoji_ranking_bot_lib::build_client(&config)?;

    match config.run_mode {
        RunMode::Once => {
            emoji_ranking_bot_lib::run_once(&config, &client).await?;
        }
        RunMode::Schedule => {
            let shutdown = CancellationToken::new();
            let token = shutdown.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("Shutting down...");
                }
                token.cancel();
            });

            tracing::info!("Scheduler running. Press Ctrl+C to stop.");
            scheduler::monthly_loop(&config, &client, &shutdown).await;
        }
    }
    Ok(())
}
