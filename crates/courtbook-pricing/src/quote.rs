//! Price computation over a resolved day timeline.
//!
//! Prices are accrued per minute of occupancy: a segment contributes
//! `rate * minutes / 60`. The exact sum is kept in cent-minutes and divided
//! once at the end, so the total never drifts from per-line rounding.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{PricingError, Result};
use crate::timeline::DaySegment;

/// One priced span of a quoted booking interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    /// Start of the span (inclusive).
    pub start: ClockTime,
    /// End of the span (exclusive).
    pub end: ClockTime,
    /// Minutes of the booking spent in this span.
    pub minutes: u32,
    /// Hourly rate applied to the span, in cents.
    pub rate_cents: u32,
    /// Amount for this span, rounded to the nearest cent. Lines round
    /// independently for display; the quote total rounds the exact sum once
    /// and is authoritative.
    pub amount_cents: u32,
}

/// A priced booking interval with its per-segment breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Per-segment breakdown of the interval.
    pub lines: Vec<QuoteLine>,
    /// Total price in cents, rounded to the nearest cent.
    pub total_cents: u32,
}

/// Prices a booking interval against a day timeline.
///
/// The interval is `[start, start + duration)`. An interval crossing
/// midnight is rejected: bookings never span two calendar dates under this
/// pricing model. A zero-length interval is a caller bug and is rejected
/// too.
pub fn price_for_interval(
    timeline: &[DaySegment],
    start: ClockTime,
    duration_minutes: u32,
) -> Result<u32> {
    Ok(quote_for_interval(timeline, start, duration_minutes)?.total_cents)
}

/// Like [`price_for_interval`], but returns the per-segment breakdown for
/// booking-preview display.
pub fn quote_for_interval(
    timeline: &[DaySegment],
    start: ClockTime,
    duration_minutes: u32,
) -> Result<Quote> {
    if duration_minutes == 0 {
        return Err(PricingError::EmptyInterval);
    }
    let from = start.to_minutes() as u32;
    let to = from + duration_minutes;
    if to > 1440 {
        return Err(PricingError::CrossesMidnight {
            start,
            duration_minutes,
        });
    }

    let mut lines = Vec::new();
    // Accrued cent-minutes; divided by 60 once at the end.
    let mut accrued: u64 = 0;
    for segment in timeline {
        let overlap_from = from.max(segment.start.to_minutes() as u32);
        let overlap_to = to.min(segment.end.to_minutes() as u32);
        if overlap_from >= overlap_to {
            continue;
        }
        let minutes = overlap_to - overlap_from;
        let cent_minutes = segment.price_cents as u64 * minutes as u64;
        accrued += cent_minutes;
        lines.push(QuoteLine {
            start: ClockTime::from_minutes(overlap_from as u16),
            end: ClockTime::from_minutes(overlap_to as u16),
            minutes,
            rate_cents: segment.price_cents,
            amount_cents: round_cent_minutes(cent_minutes),
        });
    }

    Ok(Quote {
        lines,
        total_cents: round_cent_minutes(accrued),
    })
}

/// Rounds cent-minutes to the nearest cent, halves up.
fn round_cent_minutes(cent_minutes: u64) -> u32 {
    ((cent_minutes + 30) / 60) as u32
}
