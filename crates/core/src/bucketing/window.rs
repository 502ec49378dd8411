//! Trailing month windows.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use super::error::WindowError;
use super::types::YearMonth;

/// Largest accepted window, ten years of months.
pub const MAX_MONTHS: u32 = 120;

/// One calendar month inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthPeriod {
    /// Grouping key.
    pub key: YearMonth,
    /// First day of the month.
    pub start: NaiveDate,
    /// Last day of the month.
    pub end: NaiveDate,
}

impl MonthPeriod {
    /// Returns true if `date` falls within this month.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// `month_count` consecutive calendar months ending with the month of `reference_date`.
///
/// The reference date is always supplied by the caller; nothing here reads a clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    reference_date: NaiveDate,
    periods: Vec<MonthPeriod>,
}

impl MonthWindow {
    /// Builds the window, oldest month first.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::ZeroMonths`] for an empty window,
    /// [`WindowError::TooManyMonths`] above [`MAX_MONTHS`] and
    /// [`WindowError::OutOfRange`] when the months are not representable.
    pub fn new(month_count: u32, reference_date: NaiveDate) -> Result<Self, WindowError> {
        check_month_count(month_count)?;

        let out_of_range = || WindowError::OutOfRange {
            month_count,
            reference_date,
        };

        let last_start = reference_date - Days::new(u64::from(reference_date.day0()));
        let first_start = last_start
            .checked_sub_months(Months::new(month_count - 1))
            .ok_or_else(out_of_range)?;

        let mut periods = Vec::with_capacity(month_count as usize);
        let mut start = first_start;
        for _ in 0..month_count {
            let next_start = start
                .checked_add_months(Months::new(1))
                .ok_or_else(out_of_range)?;
            let end = next_start.pred_opt().ok_or_else(out_of_range)?;
            periods.push(MonthPeriod {
                key: YearMonth::of(start),
                start,
                end,
            });
            start = next_start;
        }

        Ok(Self {
            reference_date,
            periods,
        })
    }

    /// Number of months in the window.
    #[must_use]
    pub fn month_count(&self) -> usize {
        self.periods.len()
    }

    /// The date the window is anchored to.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Months in chronological order.
    #[must_use]
    pub fn periods(&self) -> &[MonthPeriod] {
        &self.periods
    }

    /// First day of the oldest month.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.periods.first().map_or(self.reference_date, |p| p.start)
    }

    /// Last day of the reference month.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.periods.last().map_or(self.reference_date, |p| p.end)
    }

    /// Position of the month containing `date`, if it lies in the window.
    #[must_use]
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.periods.first()?.key;
        let offset = first.months_until(YearMonth::of(date));
        usize::try_from(offset)
            .ok()
            .filter(|&index| index < self.periods.len())
    }

    /// Returns true if `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }
}

/// Checks `month_count` lies in `1..=MAX_MONTHS`.
///
/// # Errors
///
/// Returns [`WindowError::ZeroMonths`] or [`WindowError::TooManyMonths`].
pub fn check_month_count(month_count: u32) -> Result<(), WindowError> {
    match month_count {
        0 => Err(WindowError::ZeroMonths),
        n if n > MAX_MONTHS => Err(WindowError::TooManyMonths {
            month_count,
            max: MAX_MONTHS,
        }),
        _ => Ok(()),
    }
}
