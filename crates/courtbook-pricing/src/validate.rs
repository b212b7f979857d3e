//! Structural and semantic validation of pricing rules.
//!
//! One validator serves both the live form binding and the trust boundary
//! before persistence. Whole-set semantics: a rule set is used only if the
//! entire set validates; a single bad rule rejects all of it.
//!
//! Overlap in time-of-day across rules of different kinds is allowed here on
//! purpose; the timeline builder resolves it by precedence.

use std::collections::HashSet;

use crate::clock::{ClockTime, TimeWindow};
use crate::error::{RuleField, ValidationError};
use crate::price_rules::{PriceRule, PriceRuleSet, RuleKind};

/// Parses a `HH:MM` form value into a [`ClockTime`].
pub fn parse_time(input: &str, field: RuleField) -> Result<ClockTime, ValidationError> {
    ClockTime::parse(input).ok_or_else(|| ValidationError::MalformedTime {
        field,
        input: input.to_string(),
    })
}

/// Parses a start/end pair of form values into a window, checking order.
pub fn parse_window(start: &str, end: &str) -> Result<TimeWindow, ValidationError> {
    let start = parse_time(start, RuleField::StartTime)?;
    let end = parse_time(end, RuleField::EndTime)?;
    if start >= end {
        return Err(ValidationError::StartNotBeforeEnd { start, end });
    }
    Ok(TimeWindow::new(start, end))
}

/// Validates a single rule.
///
/// Checks window ordering, a positive price, and that exactly the field the
/// rule's kind demands is present.
pub fn validate_rule(rule: &PriceRule) -> Result<(), ValidationError> {
    if rule.window.start >= rule.window.end {
        return Err(ValidationError::StartNotBeforeEnd {
            start: rule.window.start,
            end: rule.window.end,
        });
    }
    if rule.price_cents == 0 {
        return Err(ValidationError::NonPositivePrice);
    }

    let required = match rule.kind {
        RuleKind::SpecificDay => Some(RuleField::DayOfWeek),
        RuleKind::SpecificDate => Some(RuleField::Date),
        RuleKind::Holiday => Some(RuleField::HolidayId),
        RuleKind::Weekdays | RuleKind::Weekends | RuleKind::AllDays => None,
    };
    let fields = [
        (RuleField::DayOfWeek, rule.day_of_week.is_some()),
        (RuleField::Date, rule.date.is_some()),
        (RuleField::HolidayId, rule.holiday_id.is_some()),
    ];
    for (field, present) in fields {
        match (required == Some(field), present) {
            (true, false) => {
                return Err(ValidationError::MissingKindField {
                    kind: rule.kind,
                    field,
                })
            }
            (false, true) => {
                return Err(ValidationError::UnexpectedKindField {
                    kind: rule.kind,
                    field,
                })
            }
            _ => {}
        }
    }

    Ok(())
}

/// Validates a whole rule set.
///
/// Every rule must pass [`validate_rule`]; beyond that, no two
/// `SpecificDate` rules may share a date and no two `Holiday` rules may
/// reference the same holiday.
pub fn validate_rule_set(rules: &PriceRuleSet) -> Result<(), ValidationError> {
    for rule in rules.iter() {
        validate_rule(rule)?;
    }

    let mut dates = HashSet::new();
    let mut holiday_ids = HashSet::new();
    for rule in rules.iter() {
        match rule.kind {
            RuleKind::SpecificDate => {
                if let Some(date) = rule.date {
                    if !dates.insert(date) {
                        return Err(ValidationError::DuplicateDate { date });
                    }
                }
            }
            RuleKind::Holiday => {
                if let Some(id) = rule.holiday_id.as_deref() {
                    if !holiday_ids.insert(id.to_string()) {
                        return Err(ValidationError::DuplicateHoliday {
                            holiday_id: id.to_string(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Weekday;
    use chrono::NaiveDate;

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    // ==================== parse_time / parse_window Tests ====================

    #[test]
    fn parse_time_accepts_valid() {
        assert_eq!(
            parse_time("09:30", RuleField::StartTime),
            Ok(ClockTime::new(9, 30))
        );
    }

    #[test]
    fn parse_time_reports_field_and_input() {
        let err = parse_time("9am", RuleField::EndTime).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MalformedTime {
                field: RuleField::EndTime,
                input: "9am".to_string(),
            }
        );
        assert_eq!(err.field(), RuleField::EndTime);
    }

    #[test]
    fn parse_window_checks_order() {
        assert!(parse_window("09:00", "12:00").is_ok());

        let err = parse_window("12:00", "09:00").unwrap_err();
        assert!(matches!(err, ValidationError::StartNotBeforeEnd { .. }));

        let err = parse_window("10:00", "10:00").unwrap_err();
        assert!(matches!(err, ValidationError::StartNotBeforeEnd { .. }));
    }

    // ==================== validate_rule Tests ====================

    #[test]
    fn valid_rules_pass() {
        let window = TimeWindow::from_hours(9, 12);
        assert!(validate_rule(&PriceRule::all_days("a", window, 1200)).is_ok());
        assert!(validate_rule(&PriceRule::weekdays("b", window, 1200)).is_ok());
        assert!(
            validate_rule(&PriceRule::specific_day("c", Weekday::Monday, window, 1200)).is_ok()
        );
        assert!(validate_rule(&PriceRule::specific_date("d", tuesday(), window, 1200)).is_ok());
        assert!(validate_rule(&PriceRule::holiday("e", "xmas", window, 1200)).is_ok());
    }

    #[test]
    fn inverted_window_rejected() {
        let rule = PriceRule::all_days("a", TimeWindow::from_hours(12, 9), 1200);
        let err = validate_rule(&rule).unwrap_err();
        assert_eq!(
            err,
            ValidationError::StartNotBeforeEnd {
                start: ClockTime::from_hour(12),
                end: ClockTime::from_hour(9),
            }
        );
    }

    #[test]
    fn zero_price_rejected() {
        let rule = PriceRule::all_days("a", TimeWindow::from_hours(9, 12), 0);
        assert_eq!(
            validate_rule(&rule).unwrap_err(),
            ValidationError::NonPositivePrice
        );
    }

    #[test]
    fn missing_kind_field_rejected() {
        let mut rule =
            PriceRule::specific_day("a", Weekday::Monday, TimeWindow::from_hours(9, 12), 1200);
        rule.day_of_week = None;
        assert_eq!(
            validate_rule(&rule).unwrap_err(),
            ValidationError::MissingKindField {
                kind: RuleKind::SpecificDay,
                field: RuleField::DayOfWeek,
            }
        );
    }

    #[test]
    fn unexpected_kind_field_rejected() {
        let mut rule = PriceRule::weekdays("a", TimeWindow::from_hours(9, 12), 1200);
        rule.date = Some(tuesday());
        assert_eq!(
            validate_rule(&rule).unwrap_err(),
            ValidationError::UnexpectedKindField {
                kind: RuleKind::Weekdays,
                field: RuleField::Date,
            }
        );
    }

    #[test]
    fn holiday_rule_with_date_field_rejected() {
        let mut rule = PriceRule::holiday("a", "xmas", TimeWindow::from_hours(9, 12), 1200);
        rule.date = Some(tuesday());
        assert_eq!(
            validate_rule(&rule).unwrap_err(),
            ValidationError::UnexpectedKindField {
                kind: RuleKind::Holiday,
                field: RuleField::Date,
            }
        );
    }

    // ==================== validate_rule_set Tests ====================

    #[test]
    fn overlapping_kinds_allowed_in_set() {
        let mut set = PriceRuleSet::new();
        set.add_rule(PriceRule::weekdays("wk", TimeWindow::from_hours(9, 12), 1500));
        set.add_rule(PriceRule::specific_date(
            "d",
            tuesday(),
            TimeWindow::from_hours(10, 11),
            3000,
        ));
        set.add_rule(PriceRule::all_days("all", TimeWindow::from_hours(8, 20), 1200));

        assert!(validate_rule_set(&set).is_ok());
    }

    #[test]
    fn duplicate_specific_date_rejected() {
        let mut set = PriceRuleSet::new();
        set.add_rule(PriceRule::specific_date(
            "d1",
            tuesday(),
            TimeWindow::from_hours(9, 12),
            1500,
        ));
        set.add_rule(PriceRule::specific_date(
            "d2",
            tuesday(),
            TimeWindow::from_hours(14, 16),
            2000,
        ));

        assert_eq!(
            validate_rule_set(&set).unwrap_err(),
            ValidationError::DuplicateDate { date: tuesday() }
        );
    }

    #[test]
    fn distinct_specific_dates_allowed() {
        let mut set = PriceRuleSet::new();
        set.add_rule(PriceRule::specific_date(
            "d1",
            tuesday(),
            TimeWindow::from_hours(9, 12),
            1500,
        ));
        set.add_rule(PriceRule::specific_date(
            "d2",
            NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
            TimeWindow::from_hours(9, 12),
            1500,
        ));

        assert!(validate_rule_set(&set).is_ok());
    }

    #[test]
    fn duplicate_holiday_rejected() {
        let mut set = PriceRuleSet::new();
        set.add_rule(PriceRule::holiday("h1", "xmas", TimeWindow::from_hours(9, 12), 1500));
        set.add_rule(PriceRule::holiday("h2", "xmas", TimeWindow::from_hours(14, 16), 2000));

        assert_eq!(
            validate_rule_set(&set).unwrap_err(),
            ValidationError::DuplicateHoliday {
                holiday_id: "xmas".to_string(),
            }
        );
    }

    #[test]
    fn bad_rule_rejects_whole_set() {
        let mut set = PriceRuleSet::new();
        set.add_rule(PriceRule::all_days("good", TimeWindow::from_hours(8, 20), 1200));
        set.add_rule(PriceRule::all_days("bad", TimeWindow::from_hours(9, 12), 0));

        assert_eq!(
            validate_rule_set(&set).unwrap_err(),
            ValidationError::NonPositivePrice
        );
    }
}
