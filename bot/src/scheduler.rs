//! Monthly run scheduling.

use std::time::Duration;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;
use slack_client::SlackApiClient;

/// Longest single sleep, so clock jumps are picked up within the hour.
const MAX_SLEEP: Duration = Duration::from_secs(3600);

/// Returns true if the token was cancelled before `duration` elapsed.
pub async fn sleep_or_cancel(token: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => true,
        _ = sleep(duration) => false,
    }
}

/// The first `day` at `hour:00` local time strictly after `now`.
///
/// Months where that local time does not exist (a DST gap) are skipped.
/// `None` only if no candidate exists within a year.
pub fn next_run_after(now: &DateTime<Tz>, day: u32, hour: u32) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    let base = now.year() * 12 + now.month0() as i32;
    (0..=12).find_map(|offset| {
        let month_index = base + offset;
        let year = month_index.div_euclid(12);
        let month = month_index.rem_euclid(12) as u32 + 1;
        tz.with_ymd_and_hms(year, month, day, hour, 0, 0)
            .earliest()
            .filter(|candidate| candidate > now)
    })
}

/// Run the ranking every month until `shutdown` is cancelled.
///
/// A failed run is logged and the loop waits for the next slot.
pub async fn monthly_loop(
    config: &AppConfig,
    client: &SlackApiClient,
    shutdown: &CancellationToken,
) {
    let tz = config.tz();
    loop {
        let now = Utc::now().with_timezone(&tz);
        let Some(next) = next_run_after(&now, config.schedule_day, config.schedule_hour) else {
            tracing::error!(
                day = config.schedule_day,
                hour = config.schedule_hour,
                "No upcoming run time, scheduler stopped"
            );
            return;
        };
        tracing::info!(next_run = %next, "Next ranking scheduled");

        loop {
            let remaining = (next.with_timezone(&Utc) - Utc::now())
                .to_std()
                .unwrap_or(Duration::ZERO);
            if remaining.is_zero() {
                break;
            }
            if sleep_or_cancel(shutdown, remaining.min(MAX_SLEEP)).await {
                tracing::info!("Scheduler stopped (shutdown)");
                return;
            }
        }

        match crate::run_once(config, client).await {
            Ok(report) => {
                tracing::info!(lines = report.lines().count(), "Monthly ranking finished");
            }
            Err(e) => tracing::error!("Monthly ranking failed: {e:#}"),
        }
    }
}
