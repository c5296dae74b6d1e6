//! Service layer for assignment creation, transitions, and listing.

use crate::assignment::{
    domain::{
        AssignmentDetails, AssignmentDomainError, AssignmentFilter, AssignmentId, Priority,
        Recurrence, TaskAssignment, TemplateSnapshot,
    },
    ports::{AssignmentRepository, AssignmentRepositoryError},
};
use crate::catalog::{
    domain::TemplateId,
    ports::{TemplateRepository, TemplateRepositoryError},
};
use crate::events::{EventSink, WorkflowEvent};
use crate::identity::{ActorContext, ActorId, DirectoryError, MemberDirectory};
use crate::ledger::{
    domain::{CompletionRecord, CompletionTarget, LedgerDomainError},
    ports::{CompletionLedger, LedgerRepositoryError},
};
use chrono::{NaiveDate, NaiveTime};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating an assignment from a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTaskRequest {
    template_id: TemplateId,
    assignee: ActorId,
    due_date: NaiveDate,
    due_time: Option<NaiveTime>,
    priority: Priority,
    recurrence: Recurrence,
    notes: Option<String>,
}

impl AssignTaskRequest {
    /// Creates a request with required assignment fields.
    #[must_use]
    pub const fn new(
        template_id: TemplateId,
        assignee: ActorId,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Self {
        Self {
            template_id,
            assignee,
            due_date,
            due_time: None,
            priority,
            recurrence: Recurrence::None,
            notes: None,
        }
    }

    /// Sets the due time of day.
    #[must_use]
    pub const fn with_due_time(mut self, due_time: NaiveTime) -> Self {
        self.due_time = Some(due_time);
        self
    }

    /// Sets the recurrence kind.
    #[must_use]
    pub const fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Sets free-form notes for the assignee.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Outcome of completing an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentCompletion {
    /// The assignment that reached completed status.
    pub completed: TaskAssignment,
    /// The follow-up assignment created for recurring work, if any.
    pub successor: Option<TaskAssignment>,
}

/// Service-level errors for assignment operations.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),
    /// Assignment repository operation failed.
    #[error(transparent)]
    Repository(#[from] AssignmentRepositoryError),
    /// Template catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] TemplateRepositoryError),
    /// Member directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// Completion ledger append failed.
    #[error(transparent)]
    Ledger(#[from] LedgerRepositoryError),
    /// Completion record construction failed.
    #[error(transparent)]
    LedgerDomain(#[from] LedgerDomainError),
    /// The template does not resolve within the caller's organization.
    #[error("template {0} does not resolve within the caller's organization")]
    TemplateNotFound(TemplateId),
    /// The template has been deactivated.
    #[error("template {0} is no longer active")]
    TemplateInactive(TemplateId),
    /// The assignee does not resolve within the caller's organization.
    #[error("assignee {0} does not resolve within the caller's organization")]
    UnknownAssignee(ActorId),
}

/// Result type for assignment service operations.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// Assignment orchestration service.
#[derive(Clone)]
pub struct AssignmentService<T, R, D, L, E, C>
where
    T: TemplateRepository,
    R: AssignmentRepository,
    D: MemberDirectory,
    L: CompletionLedger,
    E: EventSink,
    C: Clock + Send + Sync,
{
    templates: Arc<T>,
    repository: Arc<R>,
    directory: Arc<D>,
    ledger: Arc<L>,
    events: Arc<E>,
    clock: Arc<C>,
}

impl<T, R, D, L, E, C> AssignmentService<T, R, D, L, E, C>
where
    T: TemplateRepository,
    R: AssignmentRepository,
    D: MemberDirectory,
    L: CompletionLedger,
    E: EventSink,
    C: Clock + Send + Sync,
{
    /// Creates a new assignment service.
    #[must_use]
    pub const fn new(
        templates: Arc<T>,
        repository: Arc<R>,
        directory: Arc<D>,
        ledger: Arc<L>,
        events: Arc<E>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            templates,
            repository,
            directory,
            ledger,
            events,
            clock,
        }
    }

    /// Creates a pending assignment from a catalog template.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::TemplateNotFound`] /
    /// [`AssignmentError::TemplateInactive`] when the template does not
    /// resolve, [`AssignmentError::UnknownAssignee`] when the assignee is
    /// not a member of the caller's organization, or a repository error
    /// when persistence rejects the assignment.
    pub async fn assign(
        &self,
        ctx: &ActorContext,
        request: AssignTaskRequest,
    ) -> AssignmentResult<TaskAssignment> {
        let template = self
            .templates
            .find_by_id(ctx.organization_id, request.template_id)
            .await?
            .ok_or(AssignmentError::TemplateNotFound(request.template_id))?;
        if !template.is_active() {
            return Err(AssignmentError::TemplateInactive(request.template_id));
        }
        if !self
            .directory
            .is_member(ctx.organization_id, request.assignee)
            .await?
        {
            return Err(AssignmentError::UnknownAssignee(request.assignee));
        }

        let details = AssignmentDetails {
            organization_id: ctx.organization_id,
            template_id: template.id(),
            template: TemplateSnapshot::of(&template),
            assignee: request.assignee,
            assigner: ctx.actor_id,
            due_date: request.due_date,
            due_time: request.due_time,
            priority: request.priority,
            recurrence: request.recurrence,
            notes: request.notes,
        };
        let assignment = TaskAssignment::new(details, &*self.clock);
        self.repository.store(&assignment).await?;
        debug!(assignment_id = %assignment.id(), "assignment created");
        Ok(assignment)
    }

    /// Moves an assignment from pending to in progress. Assignee only.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Domain`] for permission and transition
    /// failures, or [`AssignmentError::Repository`] when the assignment is
    /// missing or the conditional update loses a race.
    pub async fn start(
        &self,
        ctx: &ActorContext,
        id: AssignmentId,
    ) -> AssignmentResult<TaskAssignment> {
        let mut assignment = self.load(ctx, id).await?;
        let expected = assignment.version();
        assignment.start(ctx, &*self.clock)?;
        self.repository.update(&assignment, expected).await?;
        debug!(assignment_id = %id, "assignment started");
        Ok(assignment)
    }

    /// Completes an in-progress assignment, appends a ledger row, emits
    /// [`WorkflowEvent::AssignmentCompleted`], and creates the next
    /// occurrence when the assignment recurs.
    ///
    /// The next occurrence is due one recurrence interval after the
    /// previous due date, regardless of when the completion happens.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Domain`] for permission and transition
    /// failures, or [`AssignmentError::Repository`] when the conditional
    /// update loses a race.
    pub async fn complete(
        &self,
        ctx: &ActorContext,
        id: AssignmentId,
    ) -> AssignmentResult<AssignmentCompletion> {
        let mut assignment = self.load(ctx, id).await?;
        let expected = assignment.version();
        assignment.complete(ctx, &*self.clock)?;
        self.repository.update(&assignment, expected).await?;

        let record = CompletionRecord::new(
            ctx.organization_id,
            CompletionTarget::Assignment(assignment.id()),
            ctx.actor_id,
            i64::from(assignment.template().estimated_duration_minutes),
            &*self.clock,
        )?;
        self.ledger.append(&record).await?;

        self.events
            .publish(WorkflowEvent::AssignmentCompleted {
                assignment_id: assignment.id(),
                actor_id: ctx.actor_id,
            })
            .await;

        let successor = assignment.next_occurrence(&*self.clock)?;
        if let Some(next) = &successor {
            self.repository.store(next).await?;
            info!(
                assignment_id = %assignment.id(),
                successor_id = %next.id(),
                next_due = %next.due_date(),
                "recurring assignment rescheduled"
            );
        } else {
            info!(assignment_id = %assignment.id(), "assignment completed");
        }

        Ok(AssignmentCompletion {
            completed: assignment,
            successor,
        })
    }

    /// Deactivates an assignment. Assigner or manager only.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Domain`] for permission failures, or
    /// [`AssignmentError::Repository`] when the assignment is missing or
    /// the conditional update loses a race.
    pub async fn deactivate(
        &self,
        ctx: &ActorContext,
        id: AssignmentId,
    ) -> AssignmentResult<TaskAssignment> {
        let mut assignment = self.load(ctx, id).await?;
        let expected = assignment.version();
        assignment.deactivate(ctx, &*self.clock)?;
        self.repository.update(&assignment, expected).await?;
        debug!(assignment_id = %id, "assignment deactivated");
        Ok(assignment)
    }

    /// Lists active assignments matching the filter.
    ///
    /// Managers see all organization assignments; other actors are narrowed
    /// to their own regardless of the requested assignee clause.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(
        &self,
        ctx: &ActorContext,
        filter: AssignmentFilter,
    ) -> AssignmentResult<Vec<TaskAssignment>> {
        let effective = if ctx.is_manager() {
            filter
        } else {
            filter.with_assignee(ctx.actor_id)
        };
        let today = self.clock.utc().date_naive();
        Ok(self
            .repository
            .list(ctx.organization_id, &effective, today)
            .await?)
    }

    async fn load(
        &self,
        ctx: &ActorContext,
        id: AssignmentId,
    ) -> AssignmentResult<TaskAssignment> {
        Ok(self
            .repository
            .find_by_id(ctx.organization_id, id)
            .await?
            .ok_or(AssignmentRepositoryError::NotFound(id))?)
    }
}
