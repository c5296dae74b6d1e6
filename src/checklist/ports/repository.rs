//! Repository port for checklist definition persistence and lookup.

use crate::checklist::domain::{ChecklistDefinition, ChecklistId};
use crate::identity::OrgId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for checklist repository operations.
pub type ChecklistRepositoryResult<T> = Result<T, ChecklistRepositoryError>;

/// Checklist persistence contract, scoped by organization.
///
/// A definition carries its items, so `store` persists the checklist and
/// every item in one operation.
#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Stores a new checklist definition with its items.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistRepositoryError::DuplicateChecklist`] when the
    /// checklist ID already exists.
    async fn store(&self, definition: &ChecklistDefinition) -> ChecklistRepositoryResult<()>;

    /// Persists changes to an existing definition (deactivation).
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistRepositoryError::NotFound`] when the checklist
    /// does not exist.
    async fn update(&self, definition: &ChecklistDefinition) -> ChecklistRepositoryResult<()>;

    /// Finds a checklist by identifier within an organization.
    ///
    /// Returns `None` when the checklist does not exist or belongs to a
    /// different organization.
    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: ChecklistId,
    ) -> ChecklistRepositoryResult<Option<ChecklistDefinition>>;

    /// Returns all active checklists for an organization.
    async fn list_active(
        &self,
        organization_id: OrgId,
    ) -> ChecklistRepositoryResult<Vec<ChecklistDefinition>>;
}

/// Errors returned by checklist repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ChecklistRepositoryError {
    /// A checklist with the same identifier already exists.
    #[error("duplicate checklist identifier: {0}")]
    DuplicateChecklist(ChecklistId),

    /// The checklist was not found.
    #[error("checklist not found: {0}")]
    NotFound(ChecklistId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChecklistRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
