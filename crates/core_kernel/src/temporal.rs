//! Temporal types for lookback windows and civil-age computation
//!
//! Underwriting rules reason about trailing windows ("claims in the last 36
//! months") and full elapsed years (applicant age, license seniority). Both
//! are computed against an explicit `as_of` date so evaluation stays
//! deterministic and testable.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Lookback window must span at least one month")]
    EmptyWindow,
}

/// A trailing window of whole months ending at an `as_of` date
///
/// The lower boundary is inclusive: an event dated exactly `months` months
/// before `as_of` still falls inside the window. Events dated after `as_of`
/// are outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackWindow {
    months: u32,
}

/// The standard claims-history window used by partner rule tables
pub const CLAIMS_LOOKBACK: LookbackWindow = LookbackWindow { months: 36 };

impl LookbackWindow {
    /// Creates a new window spanning the given number of months
    pub fn new(months: u32) -> Result<Self, TemporalError> {
        if months == 0 {
            return Err(TemporalError::EmptyWindow);
        }
        Ok(Self { months })
    }

    /// Returns the window length in months
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Returns the earliest date still inside the window
    pub fn cutoff(&self, as_of: NaiveDate) -> NaiveDate {
        as_of
            .checked_sub_months(Months::new(self.months))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Checks whether an event date falls inside the window ending at `as_of`
    pub fn contains(&self, as_of: NaiveDate, event: NaiveDate) -> bool {
        event >= self.cutoff(as_of) && event <= as_of
    }
}

/// Calculates civil age in full years at a given date
pub fn age_at(date_of_birth: NaiveDate, as_of: NaiveDate) -> u32 {
    full_years_between(date_of_birth, as_of)
}

/// Counts full elapsed years between two dates
///
/// Returns 0 when `earlier` is not actually earlier than `later`.
pub fn full_years_between(earlier: NaiveDate, later: NaiveDate) -> u32 {
    let mut years = later.year() - earlier.year();
    if later.ordinal() < earlier.ordinal() {
        years -= 1;
    }
    years.max(0) as u32
}
