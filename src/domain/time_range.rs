//! Time windows
//!
//! Concrete `[start, end]` windows and the symbolic selectors the
//! dashboard offers ("7d", "30d", "90d", "all").

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Inclusive window of instants used to filter wishlists by `created_at`.
///
/// # Invariants
/// - `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a new range.
    ///
    /// # Errors
    /// - `DomainError::InvalidTimeRange` if `start > end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::invalid_time_range(start, end));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Check if an instant lies inside the window (both ends inclusive)
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Symbolic window selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRangeOption {
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[default]
    #[serde(rename = "all")]
    AllTime,
}

impl TimeRangeOption {
    pub const ALL: [TimeRangeOption; 4] = [
        Self::Last7Days,
        Self::Last30Days,
        Self::Last90Days,
        Self::AllTime,
    ];

    /// Number of days covered, `None` for all time
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
            Self::Last90Days => Some(90),
            Self::AllTime => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::Last90Days => "90d",
            Self::AllTime => "all",
        }
    }
}

impl fmt::Display for TimeRangeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRangeOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRangeOption(s.to_string()))
    }
}

/// Resolve a selector into a concrete window ending at `now`.
///
/// Returns `None` for [`TimeRangeOption::AllTime`] (no filtering).
pub fn resolve_window(option: TimeRangeOption, now: DateTime<Utc>) -> Option<TimeRange> {
    option.days().map(|days| TimeRange {
        start: now - Duration::days(days),
        end: now,
    })
}
