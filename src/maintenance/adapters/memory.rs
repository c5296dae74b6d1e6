//! In-memory schedule repository for tests and embedding hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::OrgId;
use crate::maintenance::{
    domain::{MaintenanceSchedule, ScheduleId},
    ports::{ScheduleRepository, ScheduleRepositoryError, ScheduleRepositoryResult},
};
use crate::version::Version;

/// Thread-safe in-memory schedule repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleRepository {
    state: Arc<RwLock<HashMap<ScheduleId, MaintenanceSchedule>>>,
}

impl InMemoryScheduleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> ScheduleRepositoryError {
    ScheduleRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn store(&self, schedule: &MaintenanceSchedule) -> ScheduleRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&schedule.id()) {
            return Err(ScheduleRepositoryError::DuplicateSchedule(schedule.id()));
        }
        state.insert(schedule.id(), schedule.clone());
        Ok(())
    }

    async fn update(
        &self,
        schedule: &MaintenanceSchedule,
        expected_version: Version,
    ) -> ScheduleRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .get(&schedule.id())
            .ok_or(ScheduleRepositoryError::NotFound(schedule.id()))?;
        if stored.version() != expected_version {
            return Err(ScheduleRepositoryError::ConcurrentModification(
                schedule.id(),
            ));
        }
        state.insert(schedule.id(), schedule.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: ScheduleId,
    ) -> ScheduleRepositoryResult<Option<MaintenanceSchedule>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .get(&id)
            .filter(|schedule| schedule.organization_id() == organization_id)
            .cloned())
    }

    async fn list_active(
        &self,
        organization_id: OrgId,
    ) -> ScheduleRepositoryResult<Vec<MaintenanceSchedule>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut schedules: Vec<MaintenanceSchedule> = state
            .values()
            .filter(|schedule| {
                schedule.organization_id() == organization_id && schedule.is_active()
            })
            .cloned()
            .collect();
        schedules.sort_by_key(MaintenanceSchedule::next_due_date);
        Ok(schedules)
    }
}
