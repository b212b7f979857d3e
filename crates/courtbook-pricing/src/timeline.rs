//! Day timeline resolution: one price per instant of a court's local day.
//!
//! For a target date, the active rules' stored UTC windows are converted to
//! local time, overlaps are resolved by precedence, and the result is the
//! minimal ordered partition of `[00:00, 24:00)` into price segments. Gaps
//! take the court's default price.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{ClockTime, TimeWindow};
use crate::config::PricingConfig;
use crate::holiday::HolidayCalendar;
use crate::price_rules::{Court, PriceRule};
use crate::timezone::{resolve_timezone, utc_to_local};

/// A resolved window of one local day carrying its effective price.
///
/// The segments for a date are contiguous, non-overlapping, and cover
/// exactly `[00:00, 24:00)`; adjacent segments never share a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// Start of the segment (inclusive).
    pub start: ClockTime,
    /// End of the segment (exclusive); `24:00` closes the day.
    pub end: ClockTime,
    /// Effective hourly price within the segment, in cents.
    pub price_cents: u32,
}

impl DaySegment {
    /// Creates a new segment.
    pub fn new(start: ClockTime, end: ClockTime, price_cents: u32) -> Self {
        Self {
            start,
            end,
            price_cents,
        }
    }

    /// Minutes covered by this segment.
    pub fn duration_minutes(&self) -> u16 {
        self.end.to_minutes() - self.start.to_minutes()
    }
}

/// Converts a rule's stored UTC window into `target_date` local time.
///
/// The local start is converted directly and the end placed one window
/// length after it, so the window keeps its stored duration even when the
/// conversion lands next to a DST transition. The result may wrap midnight.
fn local_window(rule: &PriceRule, tz: Tz, target_date: NaiveDate) -> TimeWindow {
    let start = utc_to_local(rule.window.start, tz, target_date);
    let end = match start.to_minutes() + rule.window.duration_minutes() {
        minutes if minutes > 1440 => ClockTime::from_minutes(minutes - 1440),
        minutes => ClockTime::from_minutes(minutes),
    };
    TimeWindow::new(start, end)
}

/// Builds the price partition of `target_date` for a court.
///
/// Every instant takes the price of the highest-precedence active rule
/// covering it, ties going to the most recently created rule; instants no
/// rule covers take the court's default price. The partition is minimal:
/// adjacent segments with equal prices are merged.
pub fn build_day_timeline(
    court: &Court,
    target_date: NaiveDate,
    holidays: &HolidayCalendar,
    config: &PricingConfig,
) -> Vec<DaySegment> {
    let (tz, _fell_back) = resolve_timezone(&court.timezone, config);

    // Active rules, strongest first.
    let mut active: Vec<&PriceRule> = court.rules.active_on(target_date, holidays);
    active.sort_by(|a, b| {
        b.kind
            .precedence()
            .cmp(&a.kind.precedence())
            .then(b.created_at.cmp(&a.created_at))
    });

    let windows: Vec<(TimeWindow, u32)> = active
        .iter()
        .map(|rule| (local_window(rule, tz, target_date), rule.price_cents))
        .collect();

    // Each span between two adjacent window edges has one effective price.
    let mut cuts = BTreeSet::from([0u16, 1440]);
    for (window, _) in &windows {
        cuts.insert(window.start.to_minutes());
        cuts.insert(window.end.to_minutes());
    }
    let cuts: Vec<u16> = cuts.into_iter().collect();

    let mut segments: Vec<DaySegment> = Vec::new();
    for span in cuts.windows(2) {
        let (from, to) = (span[0], span[1]);
        let probe = ClockTime::from_minutes(from);
        let price = windows
            .iter()
            .find(|(window, _)| window.contains(probe))
            .map(|(_, price)| *price)
            .unwrap_or(court.default_price_cents);

        match segments.last_mut() {
            Some(last) if last.price_cents == price => {
                last.end = ClockTime::from_minutes(to);
            }
            _ => segments.push(DaySegment::new(
                ClockTime::from_minutes(from),
                ClockTime::from_minutes(to),
                price,
            )),
        }
    }

    debug!(
        court = %court.id,
        date = %target_date,
        segments = segments.len(),
        "built day timeline"
    );
    segments
}
