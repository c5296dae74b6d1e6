//! Repository port for maintenance schedules with versioned updates.

use crate::identity::OrgId;
use crate::maintenance::domain::{MaintenanceSchedule, ScheduleId};
use crate::version::Version;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for schedule repository operations.
pub type ScheduleRepositoryResult<T> = Result<T, ScheduleRepositoryError>;

/// Schedule persistence contract, scoped by organization.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Stores a new schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleRepositoryError::DuplicateSchedule`] when the
    /// schedule ID already exists.
    async fn store(&self, schedule: &MaintenanceSchedule) -> ScheduleRepositoryResult<()>;

    /// Persists changes to an existing schedule, conditional on the
    /// version the caller loaded.
    ///
    /// Exactly one of two racing writers wins; the other observes
    /// [`ScheduleRepositoryError::ConcurrentModification`] and should
    /// refresh and retry. This is what stops two concurrent completions
    /// double-advancing the due date.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleRepositoryError::NotFound`] when the schedule
    /// does not exist and
    /// [`ScheduleRepositoryError::ConcurrentModification`] when the stored
    /// version no longer matches `expected_version`.
    async fn update(
        &self,
        schedule: &MaintenanceSchedule,
        expected_version: Version,
    ) -> ScheduleRepositoryResult<()>;

    /// Finds a schedule by identifier within an organization.
    ///
    /// Returns `None` when the schedule does not exist or belongs to a
    /// different organization.
    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: ScheduleId,
    ) -> ScheduleRepositoryResult<Option<MaintenanceSchedule>>;

    /// Returns all active schedules for an organization, ordered by next
    /// due date ascending.
    async fn list_active(
        &self,
        organization_id: OrgId,
    ) -> ScheduleRepositoryResult<Vec<MaintenanceSchedule>>;
}

/// Errors returned by schedule repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ScheduleRepositoryError {
    /// A schedule with the same identifier already exists.
    #[error("duplicate schedule identifier: {0}")]
    DuplicateSchedule(ScheduleId),

    /// The schedule was not found.
    #[error("schedule not found: {0}")]
    NotFound(ScheduleId),

    /// A concurrent writer updated the schedule first.
    #[error("schedule {0} was modified concurrently; refresh and retry")]
    ConcurrentModification(ScheduleId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ScheduleRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
