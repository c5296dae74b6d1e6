//! Task assignment aggregate root.

use super::{
    AssignmentDomainError, AssignmentId, AssignmentStatus, EffectiveStatus, Priority, Recurrence,
};
use crate::catalog::domain::{TaskTemplate, TaskType, TemplateId};
use crate::identity::{ActorContext, ActorId, OrgId};
use crate::version::Version;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Template fields copied onto an assignment at creation time.
///
/// Snapshotting keeps the assignment stable when the catalog template is
/// later edited or deactivated; edits apply only to future assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSnapshot {
    /// Template name at assignment time.
    pub name: String,
    /// Task category at assignment time.
    pub task_type: TaskType,
    /// Estimated duration in minutes at assignment time.
    pub estimated_duration_minutes: u32,
}

impl TemplateSnapshot {
    /// Captures a snapshot of the given template.
    #[must_use]
    pub fn of(template: &TaskTemplate) -> Self {
        Self {
            name: template.name().to_owned(),
            task_type: template.task_type(),
            estimated_duration_minutes: template.estimated_duration_minutes(),
        }
    }
}

/// Parameter object for creating a new assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDetails {
    /// Owning organization.
    pub organization_id: OrgId,
    /// Catalog template the assignment was created from.
    pub template_id: TemplateId,
    /// Template fields frozen at assignment time.
    pub template: TemplateSnapshot,
    /// The person expected to do the work.
    pub assignee: ActorId,
    /// The manager who handed out the work.
    pub assigner: ActorId,
    /// Calendar date the work is due.
    pub due_date: NaiveDate,
    /// Optional time of day the work is due.
    pub due_time: Option<NaiveTime>,
    /// Urgency of the work.
    pub priority: Priority,
    /// How the assignment repeats after completion.
    pub recurrence: Recurrence,
    /// Free-form instructions for the assignee.
    pub notes: Option<String>,
}

/// Task assignment aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAssignment {
    id: AssignmentId,
    organization_id: OrgId,
    template_id: TemplateId,
    template: TemplateSnapshot,
    assignee: ActorId,
    assigner: ActorId,
    due_date: NaiveDate,
    due_time: Option<NaiveTime>,
    priority: Priority,
    status: AssignmentStatus,
    recurrence: Recurrence,
    notes: Option<String>,
    is_active: bool,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: Version,
}

impl TaskAssignment {
    /// Creates a new pending assignment.
    #[must_use]
    pub fn new(details: AssignmentDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AssignmentId::new(),
            organization_id: details.organization_id,
            template_id: details.template_id,
            template: details.template,
            assignee: details.assignee,
            assigner: details.assigner,
            due_date: details.due_date,
            due_time: details.due_time,
            priority: details.priority,
            status: AssignmentStatus::Pending,
            recurrence: details.recurrence,
            notes: details.notes,
            is_active: true,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
            version: Version::initial(),
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrgId {
        self.organization_id
    }

    /// Returns the source template identifier.
    #[must_use]
    pub const fn template_id(&self) -> TemplateId {
        self.template_id
    }

    /// Returns the template snapshot taken at assignment time.
    #[must_use]
    pub const fn template(&self) -> &TemplateSnapshot {
        &self.template
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> ActorId {
        self.assignee
    }

    /// Returns the assigner.
    #[must_use]
    pub const fn assigner(&self) -> ActorId {
        self.assigner
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the due time of day, if any.
    #[must_use]
    pub const fn due_time(&self) -> Option<NaiveTime> {
        self.due_time
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the stored lifecycle status.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Returns the recurrence kind.
    #[must_use]
    pub const fn recurrence(&self) -> Recurrence {
        self.recurrence
    }

    /// Returns the free-form notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns whether the assignment is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the optimistic-concurrency version.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns `true` when the assignment is past due and still open.
    ///
    /// Overdue is a derived view over `(status, due_date, today)`, not a
    /// stored status; it never gates further transitions.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        matches!(
            self.status,
            AssignmentStatus::Pending | AssignmentStatus::InProgress
        ) && self.due_date < today
    }

    /// Returns the read-time status label, folding in the overdue view.
    #[must_use]
    pub fn effective_status(&self, today: NaiveDate) -> EffectiveStatus {
        if self.is_overdue(today) {
            return EffectiveStatus::Overdue;
        }
        match self.status {
            AssignmentStatus::Pending => EffectiveStatus::Pending,
            AssignmentStatus::InProgress => EffectiveStatus::InProgress,
            AssignmentStatus::Completed => EffectiveStatus::Completed,
        }
    }

    /// Moves the assignment from pending to in progress.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::NotAssignee`] when the actor is not
    /// the assignee, [`AssignmentDomainError::Inactive`] for deactivated
    /// assignments, or [`AssignmentDomainError::InvalidTransition`] when the
    /// edge is illegal.
    pub fn start(
        &mut self,
        ctx: &ActorContext,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        self.ensure_active()?;
        if ctx.actor_id != self.assignee {
            return Err(AssignmentDomainError::NotAssignee {
                actor: ctx.actor_id,
                assignment_id: self.id,
            });
        }
        self.transition_to(AssignmentStatus::InProgress)?;
        self.touch(clock);
        Ok(())
    }

    /// Moves the assignment from in progress to completed.
    ///
    /// The assignee, the assigner, and any manager may complete (manager
    /// override).
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::PermissionDenied`] for other
    /// actors, [`AssignmentDomainError::Inactive`] for deactivated
    /// assignments, or [`AssignmentDomainError::InvalidTransition`] when the
    /// edge is illegal.
    pub fn complete(
        &mut self,
        ctx: &ActorContext,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        self.ensure_active()?;
        let permitted =
            ctx.actor_id == self.assignee || ctx.actor_id == self.assigner || ctx.is_manager();
        if !permitted {
            return Err(AssignmentDomainError::PermissionDenied {
                actor: ctx.actor_id,
                assignment_id: self.id,
            });
        }
        self.transition_to(AssignmentStatus::Completed)?;
        self.completed_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Deactivates the assignment. Assigner or manager only; assignments
    /// are never deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::PermissionDenied`] for other
    /// actors.
    pub fn deactivate(
        &mut self,
        ctx: &ActorContext,
        clock: &impl Clock,
    ) -> Result<(), AssignmentDomainError> {
        if ctx.actor_id != self.assigner && !ctx.is_manager() {
            return Err(AssignmentDomainError::PermissionDenied {
                actor: ctx.actor_id,
                assignment_id: self.id,
            });
        }
        self.is_active = false;
        self.touch(clock);
        Ok(())
    }

    /// Builds the follow-up assignment for a recurring task.
    ///
    /// The successor is pending, due one recurrence interval after the
    /// previous due date. Anchoring to the prior due date rather than the
    /// completion date keeps late or early completions from drifting the
    /// schedule.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentDomainError::DateOutOfRange`] when calendar
    /// arithmetic overflows.
    pub fn next_occurrence(
        &self,
        clock: &impl Clock,
    ) -> Result<Option<Self>, AssignmentDomainError> {
        if self.recurrence == Recurrence::None {
            return Ok(None);
        }
        let next_due = self
            .recurrence
            .advance(self.due_date)
            .ok_or(AssignmentDomainError::DateOutOfRange(self.due_date))?;

        let details = AssignmentDetails {
            organization_id: self.organization_id,
            template_id: self.template_id,
            template: self.template.clone(),
            assignee: self.assignee,
            assigner: self.assigner,
            due_date: next_due,
            due_time: self.due_time,
            priority: self.priority,
            recurrence: self.recurrence,
            notes: self.notes.clone(),
        };
        Ok(Some(Self::new(details, clock)))
    }

    const fn ensure_active(&self) -> Result<(), AssignmentDomainError> {
        if !self.is_active {
            return Err(AssignmentDomainError::Inactive(self.id));
        }
        Ok(())
    }

    fn transition_to(&mut self, target: AssignmentStatus) -> Result<(), AssignmentDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(AssignmentDomainError::InvalidTransition {
                assignment_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    /// Updates the lifecycle timestamp and bumps the version token.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.version = self.version.next();
    }
}
