//! Repository port for task template persistence and lookup.

use crate::catalog::domain::{TaskTemplate, TemplateId};
use crate::identity::OrgId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for template repository operations.
pub type TemplateRepositoryResult<T> = Result<T, TemplateRepositoryError>;

/// Template persistence contract, scoped by organization.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Stores a new template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::DuplicateTemplate`] when the
    /// template ID already exists.
    async fn store(&self, template: &TaskTemplate) -> TemplateRepositoryResult<()>;

    /// Persists changes to an existing template (deactivation).
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::NotFound`] when the template does
    /// not exist.
    async fn update(&self, template: &TaskTemplate) -> TemplateRepositoryResult<()>;

    /// Finds a template by identifier within an organization.
    ///
    /// Returns `None` when the template does not exist or belongs to a
    /// different organization.
    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: TemplateId,
    ) -> TemplateRepositoryResult<Option<TaskTemplate>>;

    /// Returns all active templates for an organization.
    async fn list_active(&self, organization_id: OrgId)
    -> TemplateRepositoryResult<Vec<TaskTemplate>>;
}

/// Errors returned by template repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TemplateRepositoryError {
    /// A template with the same identifier already exists.
    #[error("duplicate template identifier: {0}")]
    DuplicateTemplate(TemplateId),

    /// The template was not found.
    #[error("template not found: {0}")]
    NotFound(TemplateId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TemplateRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
