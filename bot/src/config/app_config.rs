//! Runtime configuration loaded from environment variables.

use std::fmt;
use std::time::Duration;

use anyhow::bail;
use chrono_tz::Tz;
use emoji_ranking::window::parse_timezone;
use emoji_ranking::{PublishTarget, RankingOptions};

use super::defaults::{DEFAULT_SETTINGS, get_default, is_secret, setting_keys};
use super::validation::validate_setting;

/// Whether the bot runs a single ranking or stays up and runs monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Once,
    Schedule,
}

#[derive(Clone)]
pub struct AppConfig {
    pub bot_token: String,
    pub report_channel: String,
    pub api_base: String,
    pub http_timeout_secs: u64,
    pub timezone: String,
    pub ranking_size: usize,
    pub max_history_pages: usize,
    pub run_mode: RunMode,
    pub schedule_day: u32,
    pub schedule_hour: u32,
    pub dry_run_mode: bool,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &masked("SLACK_BOT_TOKEN", &self.bot_token))
            .field("report_channel", &masked("SLACK_REPORT_CHANNEL", &self.report_channel))
            .field("api_base", &masked("SLACK_API_BASE", &self.api_base))
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("timezone", &self.timezone)
            .field("ranking_size", &self.ranking_size)
            .field("max_history_pages", &self.max_history_pages)
            .field("run_mode", &self.run_mode)
            .field("schedule_day", &self.schedule_day)
            .field("schedule_hour", &self.schedule_hour)
            .field("dry_run_mode", &self.dry_run_mode)
            .finish()
    }
}

fn masked<'a>(key: &str, value: &'a str) -> &'a str {
    if is_secret(key) { "********" } else { value }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults.
    ///
    /// Every problem is collected before failing so a single run reports
    /// all missing and invalid settings.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let g = |key: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| get_default(key).unwrap_or_default().to_string())
        };

        let mut problems = Vec::new();
        for key in setting_keys() {
            let value = g(key);
            if value.is_empty() {
                if let Some(def) = DEFAULT_SETTINGS.get(key).filter(|d| d.required) {
                    problems.push(format!("{key} is required ({})", def.description));
                }
                continue;
            }
            // Unknown zones fall back with a warning below.
            if key == "TIMEZONE" {
                continue;
            }
            if let Err(e) = validate_setting(key, &value) {
                problems.push(format!("{key} {e}"));
            }
        }
        if !problems.is_empty() {
            bail!("Invalid configuration: {}", problems.join("; "));
        }

        let timezone = g("TIMEZONE");
        if timezone.parse::<Tz>().is_err() {
            tracing::warn!(timezone = %timezone, "Unknown timezone, using Asia/Tokyo");
        }

        Ok(Self {
            bot_token: g("SLACK_BOT_TOKEN"),
            report_channel: g("SLACK_REPORT_CHANNEL"),
            api_base: g("SLACK_API_BASE"),
            http_timeout_secs: g("SLACK_HTTP_TIMEOUT_SECS").parse()?,
            timezone,
            ranking_size: g("RANKING_SIZE").parse()?,
            max_history_pages: g("MAX_HISTORY_PAGES").parse()?,
            run_mode: if g("RUN_MODE") == "once" {
                RunMode::Once
            } else {
                RunMode::Schedule
            },
            schedule_day: g("SCHEDULE_DAY").parse()?,
            schedule_hour: g("SCHEDULE_HOUR").parse()?,
            dry_run_mode: g("DRY_RUN_MODE") == "true",
        })
    }

    pub fn tz(&self) -> Tz {
        parse_timezone(&self.timezone)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn ranking_options(&self) -> RankingOptions {
        RankingOptions {
            top_n: self.ranking_size,
            max_history_pages: self.max_history_pages,
            timezone: self.tz(),
        }
    }

    pub fn publish_target(&self) -> PublishTarget {
        PublishTarget {
            channel: self.report_channel.clone(),
            dry_run: self.dry_run_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, anyhow::Error> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("SLACK_BOT_TOKEN", "xoxb-1-2-abc"),
        ("SLACK_REPORT_CHANNEL", "C0REPORT"),
    ];

    #[test]
    fn test_defaults_applied() {
        let config = load(REQUIRED).unwrap();
        assert_eq!(config.api_base, "https://slack.com/api");
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.timezone, "Asia/Tokyo");
        assert_eq!(config.ranking_size, 10);
        assert_eq!(config.max_history_pages, 500);
        assert_eq!(config.run_mode, RunMode::Schedule);
        assert_eq!(config.schedule_day, 1);
        assert_eq!(config.schedule_hour, 9);
        assert!(!config.dry_run_mode);
    }

    #[test]
    fn test_missing_required_reports_all() {
        let err = load(&[]).unwrap_err().to_string();
        assert!(err.contains("SLACK_BOT_TOKEN is required"));
        assert!(err.contains("SLACK_REPORT_CHANNEL is required"));
        assert!(err.contains("Channel ID the monthly ranking is posted to"));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("RANKING_SIZE", "0"));
        pairs.push(("RUN_MODE", "hourly"));
        let err = load(&pairs).unwrap_err().to_string();
        assert!(err.contains("RANKING_SIZE"));
        assert!(err.contains("RUN_MODE"));
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("RUN_MODE", "once"));
        pairs.push(("DRY_RUN_MODE", "true"));
        pairs.push(("RANKING_SIZE", " 5 "));
        pairs.push(("SCHEDULE_HOUR", ""));
        let config = load(&pairs).unwrap();
        assert_eq!(config.run_mode, RunMode::Once);
        assert!(config.dry_run_mode);
        assert_eq!(config.ranking_size, 5);
        assert_eq!(config.schedule_hour, 9);

        let options = config.ranking_options();
        assert_eq!(options.top_n, 5);
        let target = config.publish_target();
        assert_eq!(target.channel, "C0REPORT");
        assert!(target.dry_run);
    }

    #[test]
    fn test_unknown_timezone_falls_back() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("TIMEZONE", "Mars/Olympus"));
        let config = load(&pairs).unwrap();
        assert_eq!(config.tz(), chrono_tz::Asia::Tokyo);

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("TIMEZONE", "UTC"));
        assert_eq!(load(&pairs).unwrap().tz(), chrono_tz::UTC);
    }

    #[test]
    fn test_debug_masks_token() {
        let config = load(REQUIRED).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("xoxb-1-2-abc"));
        assert!(printed.contains("C0REPORT"));
    }
}
