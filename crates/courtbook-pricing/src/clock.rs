//! Wall-clock primitives for pricing windows.
//!
//! This module provides the time-of-day and time-window types the pricing
//! rules are expressed in. All comparisons are minutes-since-midnight; dates
//! and timezones live elsewhere.

use chrono::{NaiveTime, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Days of the week for rule scheduling.
///
/// Numeric mapping follows the stored representation: Sunday = 0 through
/// Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the stored index for this day (Sunday = 0).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Converts from a stored index (Sunday = 0). Returns `None` for
    /// anything above 6.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Converts from chrono's Weekday.
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    /// Returns true for Monday through Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Returns all weekdays (Monday through Friday).
    pub fn weekdays() -> Vec<Weekday> {
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ]
    }

    /// Returns weekend days (Saturday and Sunday).
    pub fn weekends() -> Vec<Weekday> {
        vec![Weekday::Saturday, Weekday::Sunday]
    }

    /// Returns all days of the week, Sunday first.
    pub fn all() -> Vec<Weekday> {
        vec![
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ]
    }
}

/// Time of day represented as hour and minute.
///
/// The exclusive upper bound of a day, `24:00`, is representable (see
/// [`ClockTime::END_OF_DAY`]) so that day segments can name it; it is never a
/// valid instant to look up.
///
/// Serializes as a zero-padded `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    /// Hour (0-23, or 24 for the exclusive day end).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
}

impl ClockTime {
    /// The exclusive upper bound of a day, `24:00`.
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 24,
        minute: 0,
    };

    /// Creates a new ClockTime.
    ///
    /// # Panics
    /// Panics if minute >= 60, or hour >= 24 (except for `24:00` itself).
    pub fn new(hour: u8, minute: u8) -> Self {
        assert!(
            hour < 24 || (hour == 24 && minute == 0),
            "hour must be 0-23 (or exactly 24:00)"
        );
        assert!(minute < 60, "minute must be 0-59");
        Self { hour, minute }
    }

    /// Creates a ClockTime from hour only (minute = 0).
    pub fn from_hour(hour: u8) -> Self {
        Self::new(hour, 0)
    }

    /// Converts to minutes since midnight for comparison. `24:00` maps
    /// to 1440.
    pub fn to_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Creates from minutes since midnight (0-1440).
    pub fn from_minutes(minutes: u16) -> Self {
        assert!(minutes <= 1440, "minutes must be 0-1440");
        Self::new((minutes / 60) as u8, (minutes % 60) as u8)
    }

    /// Creates from a chrono NaiveTime, discarding seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Parses a zero-padded `"HH:MM"` string.
    ///
    /// `"24:00"` is accepted as the exclusive day end. Returns `None` for
    /// anything malformed or out of range.
    pub fn parse(input: &str) -> Option<Self> {
        let (hour, minute) = input.split_once(':')?;
        if hour.len() != 2 || minute.len() != 2 {
            return None;
        }
        let hour = hour.parse::<u8>().ok()?;
        let minute = minute.parse::<u8>().ok()?;
        if minute >= 60 || (hour > 23 && !(hour == 24 && minute == 0)) {
            return None;
        }
        Some(Self { hour, minute })
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_minutes().cmp(&other.to_minutes())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ClockTime::parse(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid HH:MM time: {raw}")))
    }
}

/// A half-open time-of-day window `[start, end)`.
///
/// Stored rule windows always satisfy `start < end` (the validator rejects
/// anything else). A window whose `end` is not after its `start` can still
/// arise transiently from a UTC-to-local conversion that crosses midnight;
/// [`TimeWindow::contains`] interprets such a window as wrapping the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start of the window (inclusive).
    pub start: ClockTime,
    /// End of the window (exclusive).
    pub end: ClockTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Creates a time window from hour values.
    pub fn from_hours(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start: ClockTime::from_hour(start_hour),
            end: ClockTime::from_hour(end_hour),
        }
    }

    /// Returns true if this window wraps past midnight (end not after start).
    pub fn wraps_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// Checks if a given time falls within this window.
    ///
    /// A wrapping window such as 22:00-02:00 contains times at or after its
    /// start or before its end.
    pub fn contains(&self, time: ClockTime) -> bool {
        if self.wraps_midnight() {
            time >= self.start || time < self.end
        } else {
            time >= self.start && time < self.end
        }
    }

    /// Length of a non-wrapping window in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.to_minutes().saturating_sub(self.start.to_minutes())
    }
}
