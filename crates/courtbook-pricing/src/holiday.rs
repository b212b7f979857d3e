//! Named holidays referenced by holiday pricing rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named holiday with a fixed calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Unique identifier for the holiday.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The date the holiday falls on.
    pub date: NaiveDate,
}

impl Holiday {
    /// Creates a new holiday.
    pub fn new(id: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
        }
    }
}

/// The holiday catalog a court's holiday rules resolve against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// The holidays in this calendar.
    pub holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self {
            holidays: Vec::new(),
        }
    }

    /// Adds a holiday to the calendar.
    pub fn add_holiday(&mut self, holiday: Holiday) {
        self.holidays.push(holiday);
    }

    /// Removes a holiday by ID.
    pub fn remove_holiday(&mut self, id: &str) -> Option<Holiday> {
        if let Some(pos) = self.holidays.iter().position(|h| h.id == id) {
            Some(self.holidays.remove(pos))
        } else {
            None
        }
    }

    /// Gets a holiday by ID.
    pub fn get_holiday(&self, id: &str) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.id == id)
    }

    /// Returns the date of the holiday with the given ID, if any.
    pub fn date_of(&self, id: &str) -> Option<NaiveDate> {
        self.get_holiday(id).map(|h| h.date)
    }

    /// Returns the first holiday falling on the given date, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date == date)
    }
}
