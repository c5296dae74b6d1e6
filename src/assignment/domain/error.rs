//! Error types for assignment domain validation and parsing.

use super::{AssignmentId, AssignmentStatus};
use crate::identity::ActorId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or mutating assignment values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The requested status change is not a legal edge of the status
    /// machine.
    #[error("invalid status transition for assignment {assignment_id}: {from:?} -> {to:?}")]
    InvalidTransition {
        /// The assignment being mutated.
        assignment_id: AssignmentId,
        /// The current status.
        from: AssignmentStatus,
        /// The requested status.
        to: AssignmentStatus,
    },

    /// Only the assignee may start an assignment.
    #[error("actor {actor} is not the assignee of assignment {assignment_id}")]
    NotAssignee {
        /// The refused actor.
        actor: ActorId,
        /// The assignment in question.
        assignment_id: AssignmentId,
    },

    /// The actor holds neither an ownership role nor manager rights.
    #[error("actor {actor} is not permitted to act on assignment {assignment_id}")]
    PermissionDenied {
        /// The refused actor.
        actor: ActorId,
        /// The assignment in question.
        assignment_id: AssignmentId,
    },

    /// The assignment has been deactivated.
    #[error("assignment {0} is no longer active")]
    Inactive(AssignmentId),

    /// Calendar arithmetic left the representable date range.
    #[error("recurrence advanced past the representable date range from {0}")]
    DateOutOfRange(NaiveDate),
}

/// Error returned while parsing assignment statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown assignment status: {0}")]
pub struct ParseAssignmentStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing recurrence kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown recurrence: {0}")]
pub struct ParseRecurrenceError(pub String);
