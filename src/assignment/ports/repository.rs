//! Repository port for assignment persistence with versioned updates.

use crate::assignment::domain::{AssignmentFilter, AssignmentId, TaskAssignment};
use crate::identity::OrgId;
use crate::version::Version;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment repository operations.
pub type AssignmentRepositoryResult<T> = Result<T, AssignmentRepositoryError>;

/// Assignment persistence contract, scoped by organization.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Stores a new assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::DuplicateAssignment`] when the
    /// assignment ID already exists.
    async fn store(&self, assignment: &TaskAssignment) -> AssignmentRepositoryResult<()>;

    /// Persists changes to an existing assignment, conditional on the
    /// version the caller loaded.
    ///
    /// Exactly one of two racing writers wins; the other observes
    /// [`AssignmentRepositoryError::ConcurrentModification`] and should
    /// refresh and retry.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::NotFound`] when the assignment
    /// does not exist and
    /// [`AssignmentRepositoryError::ConcurrentModification`] when the
    /// stored version no longer matches `expected_version`.
    async fn update(
        &self,
        assignment: &TaskAssignment,
        expected_version: Version,
    ) -> AssignmentRepositoryResult<()>;

    /// Finds an assignment by identifier within an organization.
    ///
    /// Returns `None` when the assignment does not exist or belongs to a
    /// different organization.
    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: AssignmentId,
    ) -> AssignmentRepositoryResult<Option<TaskAssignment>>;

    /// Returns active assignments matching the filter, ordered by due date
    /// ascending. `today` anchors the derived overdue view used by status
    /// filters.
    async fn list(
        &self,
        organization_id: OrgId,
        filter: &AssignmentFilter,
        today: NaiveDate,
    ) -> AssignmentRepositoryResult<Vec<TaskAssignment>>;
}

/// Errors returned by assignment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentRepositoryError {
    /// An assignment with the same identifier already exists.
    #[error("duplicate assignment identifier: {0}")]
    DuplicateAssignment(AssignmentId),

    /// The assignment was not found.
    #[error("assignment not found: {0}")]
    NotFound(AssignmentId),

    /// A concurrent writer updated the assignment first.
    #[error("assignment {0} was modified concurrently; refresh and retry")]
    ConcurrentModification(AssignmentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
