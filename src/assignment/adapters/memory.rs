//! In-memory assignment repository for tests and embedding hosts.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::assignment::{
    domain::{AssignmentFilter, AssignmentId, TaskAssignment},
    ports::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult},
};
use crate::identity::OrgId;
use crate::version::Version;

/// Thread-safe in-memory assignment repository with versioned updates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentRepository {
    state: Arc<RwLock<HashMap<AssignmentId, TaskAssignment>>>,
}

impl InMemoryAssignmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> AssignmentRepositoryError {
    AssignmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn store(&self, assignment: &TaskAssignment) -> AssignmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&assignment.id()) {
            return Err(AssignmentRepositoryError::DuplicateAssignment(
                assignment.id(),
            ));
        }
        state.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn update(
        &self,
        assignment: &TaskAssignment,
        expected_version: Version,
    ) -> AssignmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .get(&assignment.id())
            .ok_or(AssignmentRepositoryError::NotFound(assignment.id()))?;
        if stored.version() != expected_version {
            return Err(AssignmentRepositoryError::ConcurrentModification(
                assignment.id(),
            ));
        }
        state.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: AssignmentId,
    ) -> AssignmentRepositoryResult<Option<TaskAssignment>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .get(&id)
            .filter(|assignment| assignment.organization_id() == organization_id)
            .cloned())
    }

    async fn list(
        &self,
        organization_id: OrgId,
        filter: &AssignmentFilter,
        today: NaiveDate,
    ) -> AssignmentRepositoryResult<Vec<TaskAssignment>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut assignments: Vec<TaskAssignment> = state
            .values()
            .filter(|assignment| {
                assignment.organization_id() == organization_id
                    && assignment.is_active()
                    && filter.matches(assignment, today)
            })
            .cloned()
            .collect();
        assignments.sort_by_key(TaskAssignment::due_date);
        Ok(assignments)
    }
}
