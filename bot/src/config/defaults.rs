//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, bool, bool, &'static str);

const DEFS: &[DefTuple] = &[
    (
        "SLACK_BOT_TOKEN",
        "",
        true,
        true,
        "Slack bot token (xoxb-...) with channels:history, groups:history, im:history, mpim:history, channels:read, groups:read, im:read, mpim:read, chat:write",
    ),
    (
        "SLACK_REPORT_CHANNEL",
        "",
        false,
        true,
        "Channel ID the monthly ranking is posted to",
    ),
    (
        "SLACK_API_BASE",
        "https://slack.com/api",
        false,
        false,
        "Slack Web API base URL",
    ),
    (
        "SLACK_HTTP_TIMEOUT_SECS",
        "30",
        false,
        false,
        "Per-request HTTP timeout in seconds",
    ),
    (
        "TIMEZONE",
        "Asia/Tokyo",
        false,
        false,
        "IANA timezone for the one-month window and the schedule",
    ),
    ("RANKING_SIZE", "10", false, false, "Number of ranked entries"),
    (
        "MAX_HISTORY_PAGES",
        "500",
        false,
        false,
        "Maximum history pages drained per channel",
    ),
    (
        "RUN_MODE",
        "schedule",
        false,
        false,
        "'once' to run immediately and exit, 'schedule' to run monthly",
    ),
    ("SCHEDULE_DAY", "1", false, false, "Day of month to run on"),
    ("SCHEDULE_HOUR", "9", false, false, "Hour of day to run at"),
    (
        "DRY_RUN_MODE",
        "false",
        false,
        false,
        "Log the report instead of posting it",
    ),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub secret: bool,
    pub required: bool,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, secret, required, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    secret,
                    required,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// Whether the value of `key` must be masked when displayed.
pub fn is_secret(key: &str) -> bool {
    DEFAULT_SETTINGS.get(key).is_some_and(|d| d.secret)
}

/// Keys in declaration order.
pub fn setting_keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, ..)| key)
}
