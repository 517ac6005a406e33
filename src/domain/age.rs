//! Humanized age of a release timestamp

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Elapsed time since a release, displayed in human terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    /// The release instant
    pub birth: DateTime<Utc>,
}

impl Age {
    /// Creates an Age from a release instant
    pub fn new(birth: DateTime<Utc>) -> Self {
        Self { birth }
    }

    /// Creates an Age from milliseconds since the epoch
    ///
    /// Out-of-range timestamps clamp to the epoch.
    pub fn from_timestamp_millis(millis: i64) -> Self {
        let birth = DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH);
        Self { birth }
    }

    /// Whole years elapsed, relative to `now`
    pub fn years_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.birth).num_days() / 365
    }

    /// Whole years elapsed
    pub fn years(&self) -> i64 {
        self.years_at(Utc::now())
    }

    /// Humanized form relative to `now`, e.g. "a year ago", "3 months ago"
    pub fn humanize_at(&self, now: DateTime<Utc>) -> String {
        let elapsed = now - self.birth;
        let days = elapsed.num_days();
        if days > 0 {
            let years = days / 365;
            if years > 0 {
                return ago(years, "a year", "years");
            }
            let months = days / 30;
            if months > 0 {
                return ago(months, "a month", "months");
            }
            return ago(days, "a day", "days");
        }
        let hours = elapsed.num_hours();
        if hours > 0 {
            return ago(hours, "an hour", "hours");
        }
        let minutes = elapsed.num_minutes();
        if minutes > 0 {
            return ago(minutes, "a minute", "minutes");
        }
        "just now".to_string()
    }

    /// Humanized form relative to the current time
    pub fn humanize(&self) -> String {
        self.humanize_at(Utc::now())
    }
}

fn ago(n: i64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} ago", singular)
    } else {
        format!("{} {} ago", n, plural)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.humanize())
    }
}
