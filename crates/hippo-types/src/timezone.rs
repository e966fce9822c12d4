//! Process-wide timezone
//!
//! Every temporal coercion interprets offset-less input in one timezone.
//! That zone is initialised once at startup (normally by the configuration
//! loader) and only read afterwards. Reads before initialisation see UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use hippo_diagnostics::{HippoError, Result};
use once_cell::sync::OnceCell;

static TIMEZONE: OnceCell<Tz> = OnceCell::new();

/// Initialise the process timezone.
///
/// The first call wins. Repeating the call with the same zone is a no-op;
/// asking for a different zone afterwards is a startup bug and is reported
/// as [`HippoError::TimezoneAlreadySet`].
pub fn set_timezone(tz: Tz) -> Result<()> {
    let current = *TIMEZONE.get_or_init(|| {
        tracing::debug!(timezone = %tz.name(), "process timezone initialised");
        tz
    });
    if current == tz {
        Ok(())
    } else {
        Err(HippoError::TimezoneAlreadySet {
            current: current.name().to_string(),
            requested: tz.name().to_string(),
        })
    }
}

/// Parse an IANA zone name. The empty string means UTC.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(Tz::UTC);
    }
    name.parse::<Tz>()
        .map_err(|_| HippoError::invalid_timezone(name))
}

/// The configured timezone, UTC until [`set_timezone`] is called.
pub fn timezone() -> Tz {
    TIMEZONE.get().copied().unwrap_or(Tz::UTC)
}

/// Current instant in the configured timezone.
pub fn now() -> DateTime<Tz> {
    now_in(timezone())
}

/// Current instant in `tz`.
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Resolve a wall-clock reading in `tz`.
///
/// Ambiguous readings (clocks turned back) take the earlier instant. Readings
/// that fall into a gap (clocks turned forward) are shifted by the gap,
/// treating the wall clock as if the transition had not happened yet.
///
/// `None` when the reading cannot be placed inside chrono's range.
pub(crate) fn localize(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Some(dt);
    }
    let day_before = naive.checked_sub_signed(TimeDelta::days(1))?;
    let before = tz.offset_from_utc_datetime(&day_before).fix();
    let utc = naive.checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))?;
    Some(tz.from_utc_datetime(&utc))
}

/// Midnight of `date` in `tz`.
pub(crate) fn midnight(tz: Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    localize(tz, date.and_time(NaiveTime::MIN))
}
