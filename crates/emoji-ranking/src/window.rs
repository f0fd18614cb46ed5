//! Aggregation window: "now minus one calendar month".

use chrono::{DateTime, Months, TimeZone};
use chrono_tz::Tz;

use crate::RankingError;

/// Earliest message time included in a run, in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cutoff(i64);

impl Cutoff {
    pub fn from_epoch_seconds(secs: i64) -> Self {
        Self(secs)
    }

    pub fn epoch_seconds(self) -> i64 {
        self.0
    }

    /// Value for the `oldest` parameter of `conversations.history`.
    pub fn as_slack_ts(self) -> String {
        self.0.to_string()
    }
}

/// Same wall-clock time one calendar month before `now`.
///
/// When the day does not exist in the previous month (e.g. March 31st),
/// chrono clamps to that month's last day.
pub fn one_month_before<Z: TimeZone>(now: &DateTime<Z>) -> Result<Cutoff, RankingError>
where
    Z::Offset: std::fmt::Display,
{
    now.clone()
        .checked_sub_months(Months::new(1))
        .map(|t| Cutoff(t.timestamp()))
        .ok_or_else(|| RankingError::InvalidWindow(now.to_rfc3339()))
}

/// Parse an IANA timezone name, falling back to Asia/Tokyo.
pub fn parse_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or(chrono_tz::Asia::Tokyo)
}
