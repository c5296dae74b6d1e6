//! Service layer for template creation, lookup, and deactivation.

use crate::catalog::{
    domain::{CatalogDomainError, TaskTemplate, TaskType, TemplateId},
    ports::{TemplateRepository, TemplateRepositoryError},
};
use crate::identity::ActorContext;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating a task template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTemplateRequest {
    name: String,
    description: Option<String>,
    task_type: TaskType,
    estimated_duration_minutes: u32,
}

impl CreateTemplateRequest {
    /// Creates a request with required template fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        task_type: TaskType,
        estimated_duration_minutes: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            task_type,
            estimated_duration_minutes,
        }
    }

    /// Sets the template description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CatalogDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TemplateRepositoryError),
    /// The actor is not permitted to administer the catalog.
    #[error("actor {0} is not permitted to administer templates")]
    PermissionDenied(crate::identity::ActorId),
}

/// Result type for catalog service operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Template catalog orchestration service.
#[derive(Clone)]
pub struct CatalogService<R, C>
where
    R: TemplateRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CatalogService<R, C>
where
    R: TemplateRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new template. Managers only.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PermissionDenied`] for non-managers,
    /// [`CatalogError::Domain`] when validation fails, or
    /// [`CatalogError::Repository`] when persistence rejects the template.
    pub async fn create_template(
        &self,
        ctx: &ActorContext,
        request: CreateTemplateRequest,
    ) -> CatalogResult<TaskTemplate> {
        if !ctx.is_manager() {
            return Err(CatalogError::PermissionDenied(ctx.actor_id));
        }

        let mut template = TaskTemplate::new(
            ctx.organization_id,
            request.name,
            request.task_type,
            request.estimated_duration_minutes,
            &*self.clock,
        )?;
        if let Some(description) = request.description {
            template = template.with_description(description);
        }

        self.repository.store(&template).await?;
        debug!(template_id = %template.id(), "template created");
        Ok(template)
    }

    /// Deactivates a template so no new assignments can use it. Managers
    /// only.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PermissionDenied`] for non-managers or
    /// [`CatalogError::Repository`] when the template is missing.
    pub async fn deactivate_template(
        &self,
        ctx: &ActorContext,
        id: TemplateId,
    ) -> CatalogResult<TaskTemplate> {
        if !ctx.is_manager() {
            return Err(CatalogError::PermissionDenied(ctx.actor_id));
        }

        let mut template = self
            .repository
            .find_by_id(ctx.organization_id, id)
            .await?
            .ok_or(TemplateRepositoryError::NotFound(id))?;
        template.deactivate();
        self.repository.update(&template).await?;
        debug!(template_id = %id, "template deactivated");
        Ok(template)
    }

    /// Finds a template by identifier within the caller's organization.
    ///
    /// Returns `Ok(None)` when the template does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Repository`] when persistence lookup fails.
    pub async fn find_template(
        &self,
        ctx: &ActorContext,
        id: TemplateId,
    ) -> CatalogResult<Option<TaskTemplate>> {
        Ok(self.repository.find_by_id(ctx.organization_id, id).await?)
    }

    /// Lists active templates for the caller's organization.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Repository`] when persistence lookup fails.
    pub async fn list_templates(&self, ctx: &ActorContext) -> CatalogResult<Vec<TaskTemplate>> {
        Ok(self.repository.list_active(ctx.organization_id).await?)
    }
}
