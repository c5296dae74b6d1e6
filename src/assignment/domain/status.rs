//! Status machine, priority, and recurrence types for assignments.

use super::{ParseAssignmentStatusError, ParsePriorityError, ParseRecurrenceError};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Stored assignment lifecycle status.
///
/// "Overdue" is deliberately absent: it is a view over status and due date,
/// derived at read time (see [`EffectiveStatus`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Work has been assigned but not started.
    Pending,
    /// The assignee is working on it.
    InProgress,
    /// The work is done.
    Completed,
}

impl AssignmentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when moving from `self` to `target` is a legal edge
    /// of the status machine.
    ///
    /// Legal edges are `pending -> in_progress` and
    /// `in_progress -> completed`; status is otherwise monotonic.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::InProgress) | (Self::InProgress, Self::Completed)
        )
    }
}

impl TryFrom<&str> for AssignmentStatus {
    type Error = ParseAssignmentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseAssignmentStatusError(value.to_owned())),
        }
    }
}

/// Read-time status label including the derived overdue view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveStatus {
    /// Pending and not yet past due.
    Pending,
    /// In progress and not yet past due.
    InProgress,
    /// Completed.
    Completed,
    /// Pending or in progress with a due date in the past.
    Overdue,
}

impl EffectiveStatus {
    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

/// Assignment urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal workload.
    Medium,
    /// Should be picked up soon.
    High,
    /// Drop everything.
    Urgent,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// How an assignment repeats after completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    /// One-off assignment.
    None,
    /// Repeats every day.
    Daily,
    /// Repeats every week.
    Weekly,
    /// Repeats every month.
    Monthly,
}

impl Recurrence {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Advances a due date by one recurrence interval using calendar
    /// arithmetic, so month-end dates clamp (for example 31 January plus
    /// one month is 28 or 29 February).
    ///
    /// Returns `None` for [`Recurrence::None`] or when the result leaves
    /// the representable date range.
    #[must_use]
    pub fn advance(self, due_date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::None => None,
            Self::Daily => due_date.checked_add_days(Days::new(1)),
            Self::Weekly => due_date.checked_add_days(Days::new(7)),
            Self::Monthly => due_date.checked_add_months(Months::new(1)),
        }
    }
}

impl TryFrom<&str> for Recurrence {
    type Error = ParseRecurrenceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(ParseRecurrenceError(value.to_owned())),
        }
    }
}
