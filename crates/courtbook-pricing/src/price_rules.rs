//! Pricing rules, rule sets, and the courts that own them.
//!
//! A [`PriceRule`] assigns an hourly price to a time-of-day window on the
//! calendar dates its [`RuleKind`] selects. Rules are stored with UTC
//! windows; the timeline builder converts them back to a court's local time
//! per target date.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{TimeWindow, Weekday};
use crate::holiday::HolidayCalendar;
use crate::serde_helpers;

/// Which calendar dates a pricing rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// One day of the week, e.g. every Tuesday.
    SpecificDay,
    /// Monday through Friday.
    Weekdays,
    /// Saturday and Sunday.
    Weekends,
    /// One concrete calendar date.
    SpecificDate,
    /// A named holiday from the court's holiday calendar.
    Holiday,
    /// Every date.
    AllDays,
}

impl RuleKind {
    /// Precedence rank; higher wins where windows overlap.
    ///
    /// `SpecificDate` and `Holiday` share the top rank. Ties within any rank
    /// are broken by the most recently created rule.
    pub fn precedence(&self) -> u8 {
        match self {
            RuleKind::SpecificDate | RuleKind::Holiday => 3,
            RuleKind::SpecificDay => 2,
            RuleKind::Weekdays | RuleKind::Weekends => 1,
            RuleKind::AllDays => 0,
        }
    }

    /// Returns a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::SpecificDay => "Specific Day",
            RuleKind::Weekdays => "Weekdays",
            RuleKind::Weekends => "Weekends",
            RuleKind::SpecificDate => "Specific Date",
            RuleKind::Holiday => "Holiday",
            RuleKind::AllDays => "All Days",
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// A named policy assigning an hourly price to a time-of-day window.
///
/// The kind-specific target (`day_of_week`, `date`, or `holiday_id`) must be
/// present exactly when the kind demands it; the validator enforces the
/// pairing since rules arrive as flat admin-form records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRule {
    /// Unique identifier for the rule.
    pub id: String,
    /// Which calendar dates the rule applies to.
    pub kind: RuleKind,
    /// Target day; present only for `SpecificDay`.
    #[serde(
        default,
        with = "serde_helpers::weekday_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub day_of_week: Option<Weekday>,
    /// Target date; present only for `SpecificDate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Target holiday; present only for `Holiday`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_id: Option<String>,
    /// The priced window, half-open `[start, end)`, stored in UTC.
    pub window: TimeWindow,
    /// Price per hour of occupancy within the window, in cents.
    pub price_cents: u32,
    /// Disabled rules never participate in resolution.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Creation instant; breaks precedence ties, most recent wins.
    pub created_at: DateTime<Utc>,
}

impl PriceRule {
    fn base(id: impl Into<String>, kind: RuleKind, window: TimeWindow, price_cents: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            day_of_week: None,
            date: None,
            holiday_id: None,
            window,
            price_cents,
            enabled: true,
            created_at: Utc::now(),
        }
    }

    /// Creates a rule applying on every date.
    pub fn all_days(id: impl Into<String>, window: TimeWindow, price_cents: u32) -> Self {
        Self::base(id, RuleKind::AllDays, window, price_cents)
    }

    /// Creates a rule applying Monday through Friday.
    pub fn weekdays(id: impl Into<String>, window: TimeWindow, price_cents: u32) -> Self {
        Self::base(id, RuleKind::Weekdays, window, price_cents)
    }

    /// Creates a rule applying on Saturday and Sunday.
    pub fn weekends(id: impl Into<String>, window: TimeWindow, price_cents: u32) -> Self {
        Self::base(id, RuleKind::Weekends, window, price_cents)
    }

    /// Creates a rule applying on one day of the week.
    pub fn specific_day(
        id: impl Into<String>,
        day: Weekday,
        window: TimeWindow,
        price_cents: u32,
    ) -> Self {
        let mut rule = Self::base(id, RuleKind::SpecificDay, window, price_cents);
        rule.day_of_week = Some(day);
        rule
    }

    /// Creates a rule applying on one concrete date.
    pub fn specific_date(
        id: impl Into<String>,
        date: NaiveDate,
        window: TimeWindow,
        price_cents: u32,
    ) -> Self {
        let mut rule = Self::base(id, RuleKind::SpecificDate, window, price_cents);
        rule.date = Some(date);
        rule
    }

    /// Creates a rule applying on a named holiday.
    pub fn holiday(
        id: impl Into<String>,
        holiday_id: impl Into<String>,
        window: TimeWindow,
        price_cents: u32,
    ) -> Self {
        let mut rule = Self::base(id, RuleKind::Holiday, window, price_cents);
        rule.holiday_id = Some(holiday_id.into());
        rule
    }

    /// Sets the creation instant, replacing the default of now.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Disables this rule.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Enables this rule.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Checks whether this rule is active on the given date.
    ///
    /// Disabled rules are never active. Holiday rules resolve their target
    /// date through the calendar; an unknown holiday ID makes the rule
    /// inactive everywhere.
    pub fn applies_on(&self, date: NaiveDate, holidays: &HolidayCalendar) -> bool {
        if !self.enabled {
            return false;
        }
        let day = Weekday::from_chrono(date.weekday());
        match self.kind {
            RuleKind::SpecificDate => self.date == Some(date),
            RuleKind::Holiday => self
                .holiday_id
                .as_deref()
                .and_then(|id| holidays.date_of(id))
                == Some(date),
            RuleKind::SpecificDay => self.day_of_week == Some(day),
            RuleKind::Weekdays => day.is_weekday(),
            RuleKind::Weekends => day.is_weekend(),
            RuleKind::AllDays => true,
        }
    }
}

/// The pricing rules attached to one court.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRuleSet {
    /// The rules in this set.
    pub rules: Vec<PriceRule>,
}

impl PriceRuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule to the set.
    pub fn add_rule(&mut self, rule: PriceRule) {
        self.rules.push(rule);
    }

    /// Removes a rule by ID.
    pub fn remove_rule(&mut self, id: &str) -> Option<PriceRule> {
        if let Some(pos) = self.rules.iter().position(|r| r.id == id) {
            Some(self.rules.remove(pos))
        } else {
            None
        }
    }

    /// Gets a rule by ID.
    pub fn get_rule(&self, id: &str) -> Option<&PriceRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Gets a mutable reference to a rule by ID.
    pub fn get_rule_mut(&mut self, id: &str) -> Option<&mut PriceRule> {
        self.rules.iter_mut().find(|r| r.id == id)
    }

    /// Enables or disables a rule by ID. Returns false if no rule matched.
    pub fn set_rule_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.get_rule_mut(id) {
            Some(rule) => {
                rule.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Iterates over the rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceRule> {
        self.rules.iter()
    }

    /// Returns the enabled rules active on the given date.
    pub fn active_on(&self, date: NaiveDate, holidays: &HolidayCalendar) -> Vec<&PriceRule> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_on(date, holidays))
            .collect()
    }
}

/// A bookable court with its timezone, default price, and rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    /// Unique identifier for the court.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// IANA timezone identifier. An unrecognized value falls back to the
    /// engine's configured default timezone.
    pub timezone: String,
    /// Hourly price in cents where no rule covers an instant.
    pub default_price_cents: u32,
    /// The pricing rules attached to this court.
    #[serde(default)]
    pub rules: PriceRuleSet,
}

impl Court {
    /// Creates a court with an empty rule set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        timezone: impl Into<String>,
        default_price_cents: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            timezone: timezone.into(),
            default_price_cents,
            rules: PriceRuleSet::new(),
        }
    }

    /// Adds a rule, builder style.
    pub fn with_rule(mut self, rule: PriceRule) -> Self {
        self.rules.add_rule(rule);
        self
    }
}
