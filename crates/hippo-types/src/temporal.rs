//! Timezone-aware temporal values
//!
//! [`DateOnly`] and [`DateTime`] wrap an instant. Parsing interprets
//! offset-less text in the process timezone (see [`crate::timezone`]), and
//! rendering always produces RFC 3339 with an explicit offset:
//!
//! ```text
//! 2024-01-02T15:04:05-07:00
//! ```
//!
//! Both types have a zero value, `0001-01-01T00:00:00Z`, standing for
//! "unset". The zero value still renders as text; callers who need a missing
//! value to disappear should use `Option<DateOnly>` / `Option<DateTime>`.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::timezone::{self, localize, midnight};

/// Text form of the zero instant
pub const ZERO_TEXT: &str = "0001-01-01T00:00:00Z";

/// Bare calendar date accepted by [`DateOnly`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset-less date and time accepted by [`DateTime`]
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static ZERO: Lazy<chrono::DateTime<FixedOffset>> = Lazy::new(|| {
    let naive = NaiveDate::from_ymd_opt(1, 1, 1)
        .map(|date| date.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MIN);
    Utc.from_utc_datetime(&naive).fixed_offset()
});

fn render(instant: &chrono::DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A calendar date, stored as the instant of its midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateOnly(chrono::DateTime<FixedOffset>);

impl DateOnly {
    /// The zero (unset) value
    pub fn zero() -> Self {
        Self(*ZERO)
    }

    /// Wrap an existing instant as-is
    pub fn from_datetime<Z: TimeZone>(instant: chrono::DateTime<Z>) -> Self {
        Self(instant.fixed_offset())
    }

    /// Midnight today in the process timezone
    pub fn today() -> Self {
        Self::today_in(timezone::timezone())
    }

    /// Midnight today in `tz`
    pub fn today_in(tz: Tz) -> Self {
        let now = timezone::now_in(tz);
        Self(midnight(tz, now.date_naive()).unwrap_or(now).fixed_offset())
    }

    /// Parse `text` in the process timezone.
    ///
    /// Empty text yields [`DateOnly::zero`]; anything unparsable yields
    /// [`DateOnly::today`].
    pub fn parse(text: &str) -> Self {
        Self::parse_in(text, timezone::timezone())
    }

    /// Parse `text`, interpreting a bare date in `tz`.
    pub fn parse_in(text: &str, tz: Tz) -> Self {
        if text.is_empty() {
            return Self::zero();
        }
        Self::try_parse_in(text, tz).unwrap_or_else(|| {
            tracing::trace!(input = text, "unparsable date, falling back to today");
            Self::today_in(tz)
        })
    }

    /// Parse `text` in the process timezone without falling back.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::try_parse_in(text, timezone::timezone())
    }

    /// Accepts RFC 3339 or a bare `YYYY-MM-DD` (midnight in `tz`).
    pub fn try_parse_in(text: &str, tz: Tz) -> Option<Self> {
        if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(text) {
            return Some(Self(instant));
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .ok()
            .and_then(|date| midnight(tz, date))
            .map(|instant| Self(instant.fixed_offset()))
    }

    /// Check for the zero value
    pub fn is_zero(&self) -> bool {
        self.0 == *ZERO
    }

    /// The stored instant, with the offset it was built with
    pub fn instant(&self) -> chrono::DateTime<FixedOffset> {
        self.0
    }

    /// Midnight of this date in the process timezone.
    pub fn time(&self) -> chrono::DateTime<Tz> {
        self.time_in(timezone::timezone())
    }

    /// Midnight of this date in `tz`. The zero value is returned unchanged.
    pub fn time_in(&self, tz: Tz) -> chrono::DateTime<Tz> {
        let local = self.0.with_timezone(&tz);
        if self.is_zero() {
            return local;
        }
        midnight(tz, local.date_naive()).unwrap_or(local)
    }

    /// Like [`DateOnly::time`], but `None` for the zero value.
    pub fn time_or_absent(&self) -> Option<chrono::DateTime<Tz>> {
        (!self.is_zero()).then(|| self.time())
    }

    /// RFC 3339 text, second precision
    pub fn to_rfc3339(&self) -> String {
        render(&self.0)
    }
}

impl Default for DateOnly {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// An instant with time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(chrono::DateTime<FixedOffset>);

impl DateTime {
    /// The zero (unset) value
    pub fn zero() -> Self {
        Self(*ZERO)
    }

    /// Wrap an existing instant as-is
    pub fn from_datetime<Z: TimeZone>(instant: chrono::DateTime<Z>) -> Self {
        Self(instant.fixed_offset())
    }

    /// Current instant in the process timezone
    pub fn now() -> Self {
        Self::now_in(timezone::timezone())
    }

    /// Current instant in `tz`
    pub fn now_in(tz: Tz) -> Self {
        Self(timezone::now_in(tz).fixed_offset())
    }

    /// Parse `text` in the process timezone.
    ///
    /// Empty text yields [`DateTime::zero`]; anything unparsable yields
    /// [`DateTime::now`].
    pub fn parse(text: &str) -> Self {
        Self::parse_in(text, timezone::timezone())
    }

    /// Parse `text`, interpreting an offset-less reading in `tz`.
    pub fn parse_in(text: &str, tz: Tz) -> Self {
        if text.is_empty() {
            return Self::zero();
        }
        Self::try_parse_in(text, tz).unwrap_or_else(|| {
            tracing::trace!(input = text, "unparsable date-time, falling back to now");
            Self::now_in(tz)
        })
    }

    /// Parse `text` in the process timezone without falling back.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::try_parse_in(text, timezone::timezone())
    }

    /// Accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS` (wall clock in `tz`).
    pub fn try_parse_in(text: &str, tz: Tz) -> Option<Self> {
        if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(text) {
            return Some(Self(instant));
        }
        NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
            .ok()
            .and_then(|naive| localize(tz, naive))
            .map(|instant| Self(instant.fixed_offset()))
    }

    /// Check for the zero value
    pub fn is_zero(&self) -> bool {
        self.0 == *ZERO
    }

    /// The stored instant, with the offset it was built with
    pub fn instant(&self) -> chrono::DateTime<FixedOffset> {
        self.0
    }

    /// This instant in the process timezone.
    pub fn time(&self) -> chrono::DateTime<Tz> {
        self.time_in(timezone::timezone())
    }

    /// This instant in `tz`.
    pub fn time_in(&self, tz: Tz) -> chrono::DateTime<Tz> {
        self.0.with_timezone(&tz)
    }

    /// Like [`DateTime::time`], but `None` for the zero value.
    pub fn time_or_absent(&self) -> Option<chrono::DateTime<Tz>> {
        (!self.is_zero()).then(|| self.time())
    }

    /// RFC 3339 text, second precision
    pub fn to_rfc3339(&self) -> String {
        render(&self.0)
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

macro_rules! impl_serde {
    ($ty:ident, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_rfc3339())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                if text.is_empty() {
                    return Ok(Self::zero());
                }
                Self::try_parse(&text).ok_or_else(|| {
                    serde::de::Error::custom(format!(concat!("invalid ", $expecting, ": {}"), text))
                })
            }
        }
    };
}

impl_serde!(DateOnly, "date");
impl_serde!(DateTime, "date-time");
