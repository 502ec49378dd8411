//! Annual filing deadline.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::TaxError;

/// Year used to check a deadline exists in every year (not a leap year).
const COMMON_YEAR: i32 = 2001;

/// Month and day on which the annual return is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilingDeadline {
    month: u32,
    day: u32,
}

/// Upcoming deadline relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingStatus {
    /// Next due date on or after the reference date.
    pub due_date: NaiveDate,
    /// Days from the reference date to the due date.
    pub days_remaining: i64,
}

impl FilingDeadline {
    /// Creates a deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::InvalidDeadline`] unless `month/day` exists in every year.
    pub fn new(month: u32, day: u32) -> Result<Self, TaxError> {
        if NaiveDate::from_ymd_opt(COMMON_YEAR, month, day).is_none() {
            return Err(TaxError::InvalidDeadline { month, day });
        }
        Ok(Self { month, day })
    }

    /// Month of the deadline.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of the deadline.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// The deadline in `year`, if that year is representable.
    #[must_use]
    pub fn due_date_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// The first deadline on or after `reference`.
    ///
    /// Returns `None` only at the end of the supported calendar.
    #[must_use]
    pub fn next_after(&self, reference: NaiveDate) -> Option<FilingStatus> {
        let this_year = self.due_date_in(reference.year())?;
        let due_date = if reference <= this_year {
            this_year
        } else {
            self.due_date_in(reference.year().checked_add(1)?)?
        };

        Some(FilingStatus {
            due_date,
            days_remaining: (due_date - reference).num_days(),
        })
    }
}

impl Default for FilingDeadline {
    /// 30 November.
    fn default() -> Self {
        Self { month: 11, day: 30 }
    }
}
