//! In-memory checklist repository for tests and embedding hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::checklist::{
    domain::{ChecklistDefinition, ChecklistId},
    ports::{ChecklistRepository, ChecklistRepositoryError, ChecklistRepositoryResult},
};
use crate::identity::OrgId;

/// Thread-safe in-memory checklist repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChecklistRepository {
    state: Arc<RwLock<HashMap<ChecklistId, ChecklistDefinition>>>,
}

impl InMemoryChecklistRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ChecklistRepositoryError {
    ChecklistRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ChecklistRepository for InMemoryChecklistRepository {
    async fn store(&self, definition: &ChecklistDefinition) -> ChecklistRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&definition.id()) {
            return Err(ChecklistRepositoryError::DuplicateChecklist(
                definition.id(),
            ));
        }
        state.insert(definition.id(), definition.clone());
        Ok(())
    }

    async fn update(&self, definition: &ChecklistDefinition) -> ChecklistRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.contains_key(&definition.id()) {
            return Err(ChecklistRepositoryError::NotFound(definition.id()));
        }
        state.insert(definition.id(), definition.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: ChecklistId,
    ) -> ChecklistRepositoryResult<Option<ChecklistDefinition>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .get(&id)
            .filter(|definition| definition.organization_id() == organization_id)
            .cloned())
    }

    async fn list_active(
        &self,
        organization_id: OrgId,
    ) -> ChecklistRepositoryResult<Vec<ChecklistDefinition>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut definitions: Vec<ChecklistDefinition> = state
            .values()
            .filter(|definition| {
                definition.organization_id() == organization_id && definition.is_active()
            })
            .cloned()
            .collect();
        definitions.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(definitions)
    }
}
