//! Calendar date triple used throughout the engine.

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// A `{year, month, day}` calendar date.
///
/// Field semantics follow the caller contract: day 1..=31,
/// month 1..=12. Construction does not validate; see [`validate`]
/// for the field-range check applied at input edges.
///
/// [`validate`]: CalendarDate::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        use chrono::Datelike;
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }

    /// Zero-padded `DD-MM-YYYY` key.
    ///
    /// Two dates with equal fields always produce the same key, so
    /// cache lookups are by value, not identity.
    pub fn cache_key(&self) -> String {
        format!("{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }

    /// The date as a single YYYYMMDD-style integer.
    ///
    /// `2026-02-20` becomes `20260220`. Used by the day-arcana
    /// calculator, which digit-sums the concatenation.
    pub fn digit_concat(&self) -> i64 {
        self.year as i64 * 10_000 + self.month as i64 * 100 + self.day as i64
    }

    /// Parse `YYYY-MM-DD` or `DD-MM-YYYY` (also with `.` separators).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let parts: Vec<&str> = s.split(['-', '.']).collect();
        if parts.len() != 3 {
            return Err(DateError::Malformed(s.to_string()));
        }
        let nums: Vec<i64> = parts
            .iter()
            .map(|p| p.parse::<i64>())
            .collect::<Result<_, _>>()
            .map_err(|_| DateError::Malformed(s.to_string()))?;
        // A four-digit first field means year-first ordering.
        let (year, month, day) = if parts[0].len() == 4 {
            (nums[0], nums[1], nums[2])
        } else {
            (nums[2], nums[1], nums[0])
        };
        if !(1..=i32::MAX as i64).contains(&year) {
            return Err(DateError::FieldRange("year must be positive"));
        }
        let date = Self::new(year as i32, month as u32, day as u32);
        date.validate()?;
        Ok(date)
    }

    /// Field-range check: month 1..=12, day 1..=31, year >= 1.
    ///
    /// Calendar validity (day count per month, leap years, not in the
    /// future) is left to the admitting layer; the calculators accept
    /// any triple that passes here.
    pub fn validate(&self) -> Result<(), DateError> {
        if self.year < 1 {
            return Err(DateError::FieldRange("year must be >= 1"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(DateError::FieldRange("month must be in 1..=12"));
        }
        if !(1..=31).contains(&self.day) {
            return Err(DateError::FieldRange("day must be in 1..=31"));
        }
        Ok(())
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}
