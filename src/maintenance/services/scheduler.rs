//! Service layer for maintenance scheduling, completion, and sweeps.

use crate::assignment::domain::Priority;
use crate::events::{EventSink, WorkflowEvent};
use crate::identity::{ActorContext, ActorId};
use crate::ledger::{
    domain::{CompletionRecord, CompletionTarget, LedgerDomainError},
    ports::{CompletionLedger, LedgerRepositoryError},
};
use crate::maintenance::{
    domain::{
        DueState, FrequencyInterval, FrequencyType, MaintenanceDomainError, MaintenanceSchedule,
        MaintenanceType, ScheduleDetails, ScheduleId,
    },
    ports::{ScheduleRepository, ScheduleRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a maintenance schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleMaintenanceRequest {
    equipment_name: String,
    maintenance_type: MaintenanceType,
    frequency_type: FrequencyType,
    frequency_interval: FrequencyInterval,
    next_due_date: NaiveDate,
    assigned_to: Option<ActorId>,
    priority: Priority,
    estimated_duration_minutes: u32,
    instructions: Option<String>,
}

impl ScheduleMaintenanceRequest {
    /// Creates a request with required schedule fields.
    #[must_use]
    pub fn new(
        equipment_name: impl Into<String>,
        maintenance_type: MaintenanceType,
        frequency_type: FrequencyType,
        frequency_interval: FrequencyInterval,
        next_due_date: NaiveDate,
    ) -> Self {
        Self {
            equipment_name: equipment_name.into(),
            maintenance_type,
            frequency_type,
            frequency_interval,
            next_due_date,
            assigned_to: None,
            priority: Priority::Medium,
            estimated_duration_minutes: 30,
            instructions: None,
        }
    }

    /// Assigns the schedule to a specific actor.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: ActorId) -> Self {
        self.assigned_to = Some(assignee);
        self
    }

    /// Sets the schedule priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the estimated duration in minutes.
    #[must_use]
    pub const fn with_estimated_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration_minutes = minutes;
        self
    }

    /// Sets free-form work instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

/// A schedule paired with its read-time urgency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReport {
    /// The schedule.
    pub schedule: MaintenanceSchedule,
    /// Derived urgency as of the listing date.
    pub due_state: DueState,
}

/// Service-level errors for maintenance operations.
#[derive(Debug, Error)]
pub enum MaintenanceError {
    /// Domain validation or permission check failed.
    #[error(transparent)]
    Domain(#[from] MaintenanceDomainError),
    /// Schedule repository operation failed.
    #[error(transparent)]
    Repository(#[from] ScheduleRepositoryError),
    /// Completion ledger append failed.
    #[error(transparent)]
    Ledger(#[from] LedgerRepositoryError),
    /// Completion record construction failed.
    #[error(transparent)]
    LedgerDomain(#[from] LedgerDomainError),
    /// The schedule does not resolve within the caller's organization.
    #[error("schedule {0} does not resolve within the caller's organization")]
    ScheduleNotFound(ScheduleId),
    /// The caller lacks permission for the operation.
    #[error("actor {0} is not permitted to manage maintenance schedules")]
    PermissionDenied(ActorId),
}

/// Result type for maintenance service operations.
pub type MaintenanceResult<T> = Result<T, MaintenanceError>;

/// Maintenance orchestration service.
#[derive(Clone)]
pub struct MaintenanceService<R, L, E, C>
where
    R: ScheduleRepository,
    L: CompletionLedger,
    E: EventSink,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ledger: Arc<L>,
    events: Arc<E>,
    clock: Arc<C>,
}

impl<R, L, E, C> MaintenanceService<R, L, E, C>
where
    R: ScheduleRepository,
    L: CompletionLedger,
    E: EventSink,
    C: Clock + Send + Sync,
{
    /// Creates a new maintenance service.
    #[must_use]
    pub const fn new(repository: Arc<R>, ledger: Arc<L>, events: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            repository,
            ledger,
            events,
            clock,
        }
    }

    /// Creates a new active schedule. Managers only.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceError::PermissionDenied`] for non-managers,
    /// [`MaintenanceError::Domain`] when the schedule is invalid, or a
    /// repository error when persistence rejects it.
    pub async fn schedule(
        &self,
        ctx: &ActorContext,
        request: ScheduleMaintenanceRequest,
    ) -> MaintenanceResult<MaintenanceSchedule> {
        if !ctx.is_manager() {
            return Err(MaintenanceError::PermissionDenied(ctx.actor_id));
        }

        let details = ScheduleDetails {
            organization_id: ctx.organization_id,
            equipment_name: request.equipment_name,
            maintenance_type: request.maintenance_type,
            frequency_type: request.frequency_type,
            frequency_interval: request.frequency_interval,
            next_due_date: request.next_due_date,
            assigned_to: request.assigned_to,
            priority: request.priority,
            estimated_duration_minutes: request.estimated_duration_minutes,
            instructions: request.instructions,
        };
        let schedule = MaintenanceSchedule::new(details, &*self.clock)?;
        self.repository.store(&schedule).await?;
        debug!(
            schedule_id = %schedule.id(),
            equipment = schedule.equipment_name(),
            next_due = %schedule.next_due_date(),
            "maintenance scheduled"
        );
        Ok(schedule)
    }

    /// Completes the current occurrence of a schedule.
    ///
    /// Appends a maintenance-target ledger row, emits
    /// [`WorkflowEvent::MaintenanceCompleted`], and rolls the due date
    /// forward from the previous due date. The update is conditional on
    /// the loaded version, so of two racing completions exactly one wins.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceError::Domain`] for permission and lifecycle
    /// failures, or [`MaintenanceError::Repository`] when the conditional
    /// update loses a race.
    pub async fn complete(
        &self,
        ctx: &ActorContext,
        id: ScheduleId,
    ) -> MaintenanceResult<MaintenanceSchedule> {
        let mut schedule = self.load(ctx, id).await?;
        let expected = schedule.version();
        let previous_due = schedule.next_due_date();
        schedule.complete(ctx, &*self.clock)?;
        self.repository.update(&schedule, expected).await?;

        let record = CompletionRecord::new(
            ctx.organization_id,
            CompletionTarget::Maintenance(schedule.id()),
            ctx.actor_id,
            i64::from(schedule.estimated_duration_minutes()),
            &*self.clock,
        )?;
        self.ledger.append(&record).await?;

        self.events
            .publish(WorkflowEvent::MaintenanceCompleted {
                schedule_id: schedule.id(),
                actor_id: ctx.actor_id,
            })
            .await;
        info!(
            schedule_id = %schedule.id(),
            previous_due = %previous_due,
            next_due = %schedule.next_due_date(),
            "maintenance completed and rolled forward"
        );
        Ok(schedule)
    }

    /// Emits one [`WorkflowEvent::MaintenanceOverdue`] per overdue active
    /// schedule in the caller's organization.
    ///
    /// The sweep reads and publishes only; it never mutates schedules, so
    /// overlapping sweeps cannot produce double side effects beyond
    /// duplicate notifications, which delivery deduplicates.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceError::Repository`] when persistence lookup
    /// fails.
    pub async fn sweep_overdue(
        &self,
        ctx: &ActorContext,
    ) -> MaintenanceResult<Vec<MaintenanceSchedule>> {
        let today = self.clock.utc().date_naive();
        let schedules = self.repository.list_active(ctx.organization_id).await?;
        let mut overdue = Vec::new();
        for schedule in schedules {
            if schedule.is_overdue(today) {
                self.events
                    .publish(WorkflowEvent::MaintenanceOverdue {
                        schedule_id: schedule.id(),
                    })
                    .await;
                warn!(
                    schedule_id = %schedule.id(),
                    equipment = schedule.equipment_name(),
                    due = %schedule.next_due_date(),
                    "maintenance overdue"
                );
                overdue.push(schedule);
            }
        }
        Ok(overdue)
    }

    /// Deactivates a schedule. Managers only.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceError::PermissionDenied`] for non-managers or
    /// [`MaintenanceError::Repository`] when the schedule is missing or
    /// the conditional update loses a race.
    pub async fn deactivate(
        &self,
        ctx: &ActorContext,
        id: ScheduleId,
    ) -> MaintenanceResult<MaintenanceSchedule> {
        if !ctx.is_manager() {
            return Err(MaintenanceError::PermissionDenied(ctx.actor_id));
        }
        let mut schedule = self.load(ctx, id).await?;
        let expected = schedule.version();
        schedule.deactivate(&*self.clock);
        self.repository.update(&schedule, expected).await?;
        debug!(schedule_id = %id, "maintenance schedule deactivated");
        Ok(schedule)
    }

    /// Lists active schedules with their derived urgency, ordered by next
    /// due date.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self, ctx: &ActorContext) -> MaintenanceResult<Vec<ScheduleReport>> {
        let today = self.clock.utc().date_naive();
        let schedules = self.repository.list_active(ctx.organization_id).await?;
        Ok(schedules
            .into_iter()
            .map(|schedule| {
                let due_state = schedule.due_state(today);
                ScheduleReport {
                    schedule,
                    due_state,
                }
            })
            .collect())
    }

    async fn load(
        &self,
        ctx: &ActorContext,
        id: ScheduleId,
    ) -> MaintenanceResult<MaintenanceSchedule> {
        self.repository
            .find_by_id(ctx.organization_id, id)
            .await?
            .ok_or(MaintenanceError::ScheduleNotFound(id))
    }
}
