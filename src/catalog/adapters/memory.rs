//! In-memory template repository for tests and embedding hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::catalog::{
    domain::{TaskTemplate, TemplateId},
    ports::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult},
};
use crate::identity::OrgId;

/// Thread-safe in-memory template repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    state: Arc<RwLock<HashMap<TemplateId, TaskTemplate>>>,
}

impl InMemoryTemplateRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TemplateRepositoryError {
    TemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn store(&self, template: &TaskTemplate) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&template.id()) {
            return Err(TemplateRepositoryError::DuplicateTemplate(template.id()));
        }
        state.insert(template.id(), template.clone());
        Ok(())
    }

    async fn update(&self, template: &TaskTemplate) -> TemplateRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.contains_key(&template.id()) {
            return Err(TemplateRepositoryError::NotFound(template.id()));
        }
        state.insert(template.id(), template.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: TemplateId,
    ) -> TemplateRepositoryResult<Option<TaskTemplate>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .get(&id)
            .filter(|template| template.organization_id() == organization_id)
            .cloned())
    }

    async fn list_active(
        &self,
        organization_id: OrgId,
    ) -> TemplateRepositoryResult<Vec<TaskTemplate>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut templates: Vec<TaskTemplate> = state
            .values()
            .filter(|template| {
                template.organization_id() == organization_id && template.is_active()
            })
            .cloned()
            .collect();
        templates.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(templates)
    }
}
