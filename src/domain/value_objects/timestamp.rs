//! Timestamp value object.
//!
//! Provides a strongly-typed UTC timestamp for transfer records and session
//! expiry.

use std::fmt;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant.
///
/// Serialized as an RFC 3339 string (`2024-01-15T10:30:00Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wraps an existing `DateTime<Utc>`.
    #[must_use]
    pub const fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Parses an RFC 3339 string.
    ///
    /// Returns `None` if the string is not a valid RFC 3339 timestamp.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|datetime| Self(datetime.with_timezone(&Utc)))
    }

    /// Returns this instant shifted forward by `duration`.
    ///
    /// Saturates at the latest representable instant instead of overflowing.
    #[must_use]
    pub fn plus(&self, duration: Duration) -> Self {
        Self(
            self.0
                .checked_add_signed(duration)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        )
    }

    /// Returns the underlying `DateTime<Utc>`.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Formats as RFC 3339 with second precision.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_rfc3339())
    }
}
