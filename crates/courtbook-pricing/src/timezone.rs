//! Conversion between court-local wall-clock time and UTC storage time.
//!
//! Rules are stored with UTC windows; administrators edit them in the
//! court's local timezone. Conversion is date-sensitive: the same UTC time
//! maps to different local times on either side of a DST transition, so
//! date-specific callers must pass the actual rule date rather than rely on
//! the `*_today` defaults.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::clock::ClockTime;
use crate::config::PricingConfig;

/// Longest spring-forward gap worth sliding across, in minutes.
const MAX_GAP_MINUTES: u16 = 180;

/// Parses an IANA timezone identifier, falling back to the configured
/// default when it does not resolve.
///
/// The boolean is true when the fallback was taken, so callers can surface
/// the leniency to administrators instead of silently repricing in the
/// wrong zone.
pub fn resolve_timezone(name: &str, config: &PricingConfig) -> (Tz, bool) {
    match name.parse::<Tz>() {
        Ok(tz) => (tz, false),
        Err(_) => {
            warn!(
                timezone = name,
                fallback = %config.default_timezone,
                "unknown timezone identifier, using configured default"
            );
            (config.default_timezone, true)
        }
    }
}

/// Anchors a time of day to a calendar date. `24:00` is midnight of the
/// following day.
fn anchor(on: NaiveDate, time: ClockTime) -> NaiveDateTime {
    if time == ClockTime::END_OF_DAY {
        let next = on.succ_opt().unwrap_or(on);
        return NaiveDateTime::new(next, NaiveTime::MIN);
    }
    let naive = NaiveTime::from_hms_opt(time.hour as u32, time.minute as u32, 0)
        .unwrap_or(NaiveTime::MIN);
    NaiveDateTime::new(on, naive)
}

/// Interprets `time` as wall clock in `tz` on the date `on` and returns the
/// equivalent UTC time of day.
///
/// Only the time-of-day component survives by contract; a conversion
/// crossing midnight wraps around the 24-hour clock. On a DST transition an
/// ambiguous local time resolves to the earlier instant, and a nonexistent
/// one slides forward to the first valid minute.
pub fn local_to_utc(time: ClockTime, tz: Tz, on: NaiveDate) -> ClockTime {
    let mut naive = anchor(on, time);
    for _ in 0..=MAX_GAP_MINUTES {
        if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
            return ClockTime::from_naive_time(dt.with_timezone(&Utc).time());
        }
        naive += Duration::minutes(1);
    }
    // No zone in the tz database has a gap this long.
    ClockTime::from_naive_time(naive.time())
}

/// Interprets `time` as UTC wall clock on the date `on` and returns the
/// equivalent local time of day in `tz`.
///
/// Exact inverse of [`local_to_utc`] away from DST transitions.
pub fn utc_to_local(time: ClockTime, tz: Tz, on: NaiveDate) -> ClockTime {
    let utc = Utc.from_utc_datetime(&anchor(on, time));
    ClockTime::from_naive_time(utc.with_timezone(&tz).time())
}

/// [`local_to_utc`] with the reference date defaulted to today in `tz`.
///
/// Only suitable for "what would this be right now" previews; date-specific
/// conversion must pass the actual rule date.
pub fn local_to_utc_today(time: ClockTime, tz: Tz) -> ClockTime {
    local_to_utc(time, tz, Utc::now().with_timezone(&tz).date_naive())
}

/// [`utc_to_local`] with the reference date defaulted to today, UTC.
pub fn utc_to_local_today(time: ClockTime, tz: Tz) -> ClockTime {
    utc_to_local(time, tz, Utc::now().date_naive())
}
