//! Maintenance schedule aggregate root.

use super::{
    FrequencyInterval, FrequencyType, MaintenanceDomainError, ParseMaintenanceTypeError,
    ScheduleId,
};
use crate::assignment::domain::Priority;
use crate::identity::{ActorContext, ActorId, OrgId};
use crate::version::Version;
use chrono::{DateTime, Days, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of maintenance work a schedule tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    /// Routine upkeep on a fixed cadence.
    Preventive,
    /// Repair work on known faults.
    Corrective,
    /// Condition checks without repair.
    Inspection,
}

impl MaintenanceType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preventive => "preventive",
            Self::Corrective => "corrective",
            Self::Inspection => "inspection",
        }
    }
}

impl TryFrom<&str> for MaintenanceType {
    type Error = ParseMaintenanceTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "preventive" => Ok(Self::Preventive),
            "corrective" => Ok(Self::Corrective),
            "inspection" => Ok(Self::Inspection),
            _ => Err(ParseMaintenanceTypeError(value.to_owned())),
        }
    }
}

/// Read-time urgency view over the next due date.
///
/// The states are mutually exclusive; a schedule due today is due soon,
/// not overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueState {
    /// The due date has passed.
    Overdue,
    /// Due within the next seven days, today included.
    DueSoon,
    /// More than a week out.
    Scheduled,
}

impl DueState {
    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::Scheduled => "scheduled",
        }
    }
}

/// Parameter object for creating a new schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDetails {
    /// Owning organization.
    pub organization_id: OrgId,
    /// The equipment the schedule maintains.
    pub equipment_name: String,
    /// Kind of maintenance work.
    pub maintenance_type: MaintenanceType,
    /// Calendar unit the schedule recurs in.
    pub frequency_type: FrequencyType,
    /// Units between occurrences.
    pub frequency_interval: FrequencyInterval,
    /// The first due date.
    pub next_due_date: NaiveDate,
    /// The person responsible, if anyone in particular.
    pub assigned_to: Option<ActorId>,
    /// Urgency of the work.
    pub priority: Priority,
    /// Estimated duration in minutes.
    pub estimated_duration_minutes: u32,
    /// Free-form work instructions.
    pub instructions: Option<String>,
}

/// Maintenance schedule aggregate root.
///
/// `next_due_date` is never null while the schedule is active; overdue
/// and due-soon are derived from it at read time, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    id: ScheduleId,
    organization_id: OrgId,
    equipment_name: String,
    maintenance_type: MaintenanceType,
    frequency_type: FrequencyType,
    frequency_interval: FrequencyInterval,
    next_due_date: NaiveDate,
    assigned_to: Option<ActorId>,
    priority: Priority,
    estimated_duration_minutes: u32,
    instructions: Option<String>,
    is_active: bool,
    last_completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: Version,
}

impl MaintenanceSchedule {
    /// Creates a new active schedule.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceDomainError::EmptyEquipmentName`] when the
    /// equipment name is blank.
    pub fn new(details: ScheduleDetails, clock: &impl Clock) -> Result<Self, MaintenanceDomainError> {
        let equipment_name = details.equipment_name.trim().to_owned();
        if equipment_name.is_empty() {
            return Err(MaintenanceDomainError::EmptyEquipmentName);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: ScheduleId::new(),
            organization_id: details.organization_id,
            equipment_name,
            maintenance_type: details.maintenance_type,
            frequency_type: details.frequency_type,
            frequency_interval: details.frequency_interval,
            next_due_date: details.next_due_date,
            assigned_to: details.assigned_to,
            priority: details.priority,
            estimated_duration_minutes: details.estimated_duration_minutes,
            instructions: details.instructions,
            is_active: true,
            last_completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
            version: Version::initial(),
        })
    }

    /// Returns the schedule identifier.
    #[must_use]
    pub const fn id(&self) -> ScheduleId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrgId {
        self.organization_id
    }

    /// Returns the equipment name.
    #[must_use]
    pub fn equipment_name(&self) -> &str {
        &self.equipment_name
    }

    /// Returns the kind of maintenance work.
    #[must_use]
    pub const fn maintenance_type(&self) -> MaintenanceType {
        self.maintenance_type
    }

    /// Returns the calendar unit the schedule recurs in.
    #[must_use]
    pub const fn frequency_type(&self) -> FrequencyType {
        self.frequency_type
    }

    /// Returns the units between occurrences.
    #[must_use]
    pub const fn frequency_interval(&self) -> FrequencyInterval {
        self.frequency_interval
    }

    /// Returns the next due date.
    #[must_use]
    pub const fn next_due_date(&self) -> NaiveDate {
        self.next_due_date
    }

    /// Returns the responsible actor, if assigned.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<ActorId> {
        self.assigned_to
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the estimated duration in minutes.
    #[must_use]
    pub const fn estimated_duration_minutes(&self) -> u32 {
        self.estimated_duration_minutes
    }

    /// Returns the work instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Returns whether the schedule is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns when the schedule was last completed, if ever.
    #[must_use]
    pub const fn last_completed_at(&self) -> Option<DateTime<Utc>> {
        self.last_completed_at
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

    /// Returns `true` when the due date has passed.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_active && self.next_due_date < today
    }

    /// Returns `true` when the schedule is due within the next seven
    /// days, today included.
    #[must_use]
    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        let Some(horizon) = today.checked_add_days(Days::new(7)) else {
            return false;
        };
        self.is_active && self.next_due_date >= today && self.next_due_date <= horizon
    }

    /// Returns the read-time urgency view for the given date.
    #[must_use]
    pub fn due_state(&self, today: NaiveDate) -> DueState {
        if self.is_overdue(today) {
            DueState::Overdue
        } else if self.is_due_soon(today) {
            DueState::DueSoon
        } else {
            DueState::Scheduled
        }
    }

    /// Records a completion and rolls the due date forward one recurrence
    /// interval. The assigned actor and any manager may complete.
    ///
    /// The roll anchors to the previous due date rather than the
    /// completion date, so early or late completions never drift the
    /// cadence: a monthly schedule due on the 15th stays on the 15th
    /// however punctual the work is.
    ///
    /// # Errors
    ///
    /// Returns [`MaintenanceDomainError::PermissionDenied`] for other
    /// actors, [`MaintenanceDomainError::Inactive`] for deactivated
    /// schedules, and [`MaintenanceDomainError::DateOutOfRange`] when
    /// calendar arithmetic overflows.
    pub fn complete(
        &mut self,
        ctx: &ActorContext,
        clock: &impl Clock,
    ) -> Result<(), MaintenanceDomainError> {
        if !self.is_active {
            return Err(MaintenanceDomainError::Inactive(self.id));
        }
        let permitted = self.assigned_to == Some(ctx.actor_id) || ctx.is_manager();
        if !permitted {
            return Err(MaintenanceDomainError::PermissionDenied {
                actor: ctx.actor_id,
                schedule_id: self.id,
            });
        }
        let next = self
            .frequency_type
            .advance(self.next_due_date, self.frequency_interval)
            .ok_or(MaintenanceDomainError::DateOutOfRange(self.next_due_date))?;
        self.next_due_date = next;
        self.last_completed_at = Some(clock.utc());
        self.touch(clock);
        Ok(())
    }

    /// Deactivates the schedule; schedules are never deleted.
    pub fn deactivate(&mut self, clock: &impl Clock) {
        self.is_active = false;
        self.touch(clock);
    }

    /// Updates the lifecycle timestamp and bumps the version token.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.version = self.version.next();
    }
}
