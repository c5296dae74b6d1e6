//! Recurrence cadence types for maintenance schedules.

use super::{MaintenanceDomainError, ParseFrequencyTypeError};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar unit a schedule recurs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyType {
    /// Recurs in days.
    Daily,
    /// Recurs in weeks.
    Weekly,
    /// Recurs in months.
    Monthly,
    /// Recurs in three-month steps.
    Quarterly,
    /// Recurs in years.
    Yearly,
}

impl FrequencyType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Advances a due date by `interval` units using calendar arithmetic,
    /// so month-end dates clamp (for example 31 January plus one month is
    /// 28 or 29 February).
    ///
    /// Returns `None` when the result leaves the representable date range.
    #[must_use]
    pub fn advance(self, due_date: NaiveDate, interval: FrequencyInterval) -> Option<NaiveDate> {
        let units = interval.value();
        match self {
            Self::Daily => due_date.checked_add_days(Days::new(u64::from(units))),
            Self::Weekly => due_date.checked_add_days(Days::new(u64::from(units) * 7)),
            Self::Monthly => due_date.checked_add_months(Months::new(units)),
            Self::Quarterly => due_date.checked_add_months(Months::new(units.checked_mul(3)?)),
            Self::Yearly => due_date.checked_add_months(Months::new(units.checked_mul(12)?)),
        }
    }
}

impl TryFrom<&str> for FrequencyType {
    type Error = ParseFrequencyTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(ParseFrequencyTypeError(value.to_owned())),
        }
    }
}

/// Positive number of frequency units between occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyInterval(u32);

impl FrequencyInterval {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceDomainError::ZeroFrequencyInterval`] for zero.
    pub const fn new(value: u32) -> Result<Self, MaintenanceDomainError> {
        if value == 0 {
            return Err(MaintenanceDomainError::ZeroFrequencyInterval);
        }
        Ok(Self(value))
    }

    /// Returns the interval as a plain integer.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for FrequencyInterval {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for FrequencyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
