//! Error types for maintenance schedule validation.

use super::ScheduleId;
use crate::identity::ActorId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or advancing schedules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MaintenanceDomainError {
    /// The equipment name is empty after trimming.
    #[error("equipment name must not be empty")]
    EmptyEquipmentName,

    /// A frequency interval of zero would never recur.
    #[error("frequency interval must be at least 1")]
    ZeroFrequencyInterval,

    /// The actor may not complete or manage this schedule.
    #[error("actor {actor} is not permitted to act on schedule {schedule_id}")]
    PermissionDenied {
        /// The actor attempting the operation.
        actor: ActorId,
        /// The schedule being acted on.
        schedule_id: ScheduleId,
    },

    /// The schedule has been deactivated.
    #[error("maintenance schedule {0} is no longer active")]
    Inactive(ScheduleId),

    /// Calendar arithmetic left the representable date range.
    #[error("due date arithmetic overflowed from {0}")]
    DateOutOfRange(NaiveDate),
}

/// Error returned while parsing maintenance types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown maintenance type: {0}")]
pub struct ParseMaintenanceTypeError(pub String);

/// Error returned while parsing frequency types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown frequency type: {0}")]
pub struct ParseFrequencyTypeError(pub String);
