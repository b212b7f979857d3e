//! The pricing engine facade the hosting application drives.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::config::PricingConfig;
use crate::error::Result;
use crate::holiday::HolidayCalendar;
use crate::price_rules::Court;
use crate::quote::{price_for_interval, quote_for_interval, Quote};
use crate::timeline::{build_day_timeline, DaySegment};

/// One day of a price calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPrices {
    /// The calendar date.
    pub date: NaiveDate,
    /// The resolved price partition for that date.
    pub segments: Vec<DaySegment>,
}

/// Resolves rule sets into day timelines and booking prices.
///
/// Owns the injected configuration; every entry point is pure given its
/// inputs. The hosting application fetches courts, rules, and holidays from
/// storage and calls in synchronously during a request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingEngine {
    /// Engine configuration.
    pub config: PricingConfig,
}

impl PricingEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Builds the resolved price partition of `date` for display.
    pub fn day_timeline(
        &self,
        court: &Court,
        date: NaiveDate,
        holidays: &HolidayCalendar,
    ) -> Vec<DaySegment> {
        build_day_timeline(court, date, holidays, &self.config)
    }

    /// Prices a booking interval; the confirmation path.
    pub fn price_for_booking(
        &self,
        court: &Court,
        date: NaiveDate,
        start: ClockTime,
        duration_minutes: u32,
        holidays: &HolidayCalendar,
    ) -> Result<u32> {
        let timeline = self.day_timeline(court, date, holidays);
        price_for_interval(&timeline, start, duration_minutes)
    }

    /// Quotes a booking interval with its per-segment breakdown; the
    /// preview path.
    pub fn quote_for_booking(
        &self,
        court: &Court,
        date: NaiveDate,
        start: ClockTime,
        duration_minutes: u32,
        holidays: &HolidayCalendar,
    ) -> Result<Quote> {
        let timeline = self.day_timeline(court, date, holidays);
        quote_for_interval(&timeline, start, duration_minutes)
    }

    /// Builds timelines for `days` consecutive dates starting at `from`,
    /// for rendering an administrator price calendar.
    pub fn price_calendar(
        &self,
        court: &Court,
        from: NaiveDate,
        days: u32,
        holidays: &HolidayCalendar,
    ) -> Vec<DayPrices> {
        (0..days)
            .filter_map(|offset| from.checked_add_signed(Duration::days(offset as i64)))
            .map(|date| DayPrices {
                date,
                segments: self.day_timeline(court, date, holidays),
            })
            .collect()
    }
}
