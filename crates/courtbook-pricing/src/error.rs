//! Pricing and validation error types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::ClockTime;
use crate::price_rules::RuleKind;

/// The rule field an error refers to, for form-level reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleField {
    StartTime,
    EndTime,
    PriceCents,
    DayOfWeek,
    Date,
    HolidayId,
}

impl RuleField {
    /// Returns the wire name of this field.
    pub fn name(&self) -> &'static str {
        match self {
            RuleField::StartTime => "start_time",
            RuleField::EndTime => "end_time",
            RuleField::PriceCents => "price_cents",
            RuleField::DayOfWeek => "day_of_week",
            RuleField::Date => "date",
            RuleField::HolidayId => "holiday_id",
        }
    }
}

/// User-correctable errors from rule validation.
///
/// Every variant maps to a field reference and a stable message key so the
/// hosting application can highlight the offending form field and translate
/// the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A time string was not a valid zero-padded `HH:MM`.
    #[error("{field:?}: not a valid HH:MM time: {input}")]
    MalformedTime {
        /// Which time field failed to parse.
        field: RuleField,
        /// The raw input that failed.
        input: String,
    },

    /// A rule window's start was not strictly before its end.
    #[error("start time {start} must be before end time {end}")]
    StartNotBeforeEnd { start: ClockTime, end: ClockTime },

    /// A rule's price was zero.
    #[error("price must be a positive number of cents")]
    NonPositivePrice,

    /// The field a rule kind requires was absent.
    #[error("rule kind {kind:?} requires field {field:?}")]
    MissingKindField { kind: RuleKind, field: RuleField },

    /// A field not belonging to the rule kind was present.
    #[error("rule kind {kind:?} does not take field {field:?}")]
    UnexpectedKindField { kind: RuleKind, field: RuleField },

    /// Two specific-date rules share the same date.
    #[error("another rule already targets {date}")]
    DuplicateDate { date: NaiveDate },

    /// Two holiday rules reference the same holiday.
    #[error("another rule already targets holiday {holiday_id}")]
    DuplicateHoliday { holiday_id: String },
}

impl ValidationError {
    /// Returns the field this error refers to.
    pub fn field(&self) -> RuleField {
        match self {
            ValidationError::MalformedTime { field, .. } => *field,
            ValidationError::StartNotBeforeEnd { .. } => RuleField::StartTime,
            ValidationError::NonPositivePrice => RuleField::PriceCents,
            ValidationError::MissingKindField { field, .. } => *field,
            ValidationError::UnexpectedKindField { field, .. } => *field,
            ValidationError::DuplicateDate { .. } => RuleField::Date,
            ValidationError::DuplicateHoliday { .. } => RuleField::HolidayId,
        }
    }

    /// Returns a stable message key for translation lookup.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::MalformedTime { .. } => "validation.time_malformed",
            ValidationError::StartNotBeforeEnd { .. } => "validation.start_after_end",
            ValidationError::NonPositivePrice => "validation.price_not_positive",
            ValidationError::MissingKindField { .. } => "validation.kind_field_missing",
            ValidationError::UnexpectedKindField { .. } => "validation.kind_field_unexpected",
            ValidationError::DuplicateDate { .. } => "validation.duplicate_date",
            ValidationError::DuplicateHoliday { .. } => "validation.duplicate_holiday",
        }
    }
}

/// Errors from price computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The requested interval runs past the end of its calendar date.
    /// Bookings never span two dates under this pricing model.
    #[error("interval starting {start} with {duration_minutes} minutes crosses midnight")]
    CrossesMidnight {
        start: ClockTime,
        duration_minutes: u32,
    },

    /// The requested interval has no duration.
    #[error("interval duration must be at least one minute")]
    EmptyInterval,
}

/// Result type for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;
