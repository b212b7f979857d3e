//! Courtbook Pricing - time-aware pricing-rule resolution for court bookings.
//!
//! Given a court's pricing rules and a requested booking interval, this
//! crate determines the price that applies, resolving overlapping rules
//! deterministically and converting between the court's local wall-clock
//! time and the canonical UTC storage representation.
//!
//! Everything here is pure, synchronous computation: no I/O, no shared
//! state. The hosting application fetches rules from storage, calls in
//! during a request, and persists whatever validates.
//!
//! ## Architecture
//!
//! ```text
//! Stored rules (UTC windows) ──▶ active-rule filter (target date)
//!                                         │
//!                                         ▼
//!                    UTC → court-local conversion (per date, DST-aware)
//!                                         │
//!                                         ▼
//!                 precedence sweep ──▶ DaySegment partition [00:00, 24:00)
//!                                         │
//!                     ┌───────────────────┴───────────────────┐
//!                     ▼                                       ▼
//!             price_for_interval                      quote_for_interval
//!          (booking confirmation)                     (booking preview)
//! ```
//!
//! ## Precedence
//!
//! Where rule windows overlap, exactly one price applies per instant:
//! `SpecificDate` and `Holiday` (most recently created wins a tie) over
//! `SpecificDay`, over `Weekdays`/`Weekends`, over `AllDays`, over the
//! court's default price. Prices never stack or average.
//!
//! ## Timezone leniency
//!
//! A court whose IANA timezone identifier does not resolve is priced in the
//! configured default timezone ([`PricingConfig::default_timezone`]) rather
//! than failing the computation. [`resolve_timezone`] reports the fallback
//! so the hosting application can warn administrators.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod holiday;
pub mod price_rules;
pub mod quote;
pub mod serde_helpers;
pub mod timeline;
pub mod timezone;
pub mod validate;

pub use clock::{ClockTime, TimeWindow, Weekday};
pub use config::PricingConfig;
pub use engine::{DayPrices, PricingEngine};
pub use error::{PricingError, Result, RuleField, ValidationError};
pub use holiday::{Holiday, HolidayCalendar};
pub use price_rules::{Court, PriceRule, PriceRuleSet, RuleKind};
pub use quote::{price_for_interval, quote_for_interval, Quote, QuoteLine};
pub use timeline::{build_day_timeline, DaySegment};
pub use timezone::{
    local_to_utc, local_to_utc_today, resolve_timezone, utc_to_local, utc_to_local_today,
};
pub use validate::{parse_time, parse_window, validate_rule, validate_rule_set};
