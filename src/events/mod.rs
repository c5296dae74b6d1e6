//! Domain events emitted for the notification collaborator.
//!
//! The engine announces completed and overdue work; delivery (email,
//! in-app, push) is entirely the collaborator's responsibility.

mod sink;

pub use sink::{EventSink, NullEventSink, RecordingEventSink};

use crate::assignment::domain::AssignmentId;
use crate::checklist::domain::{ChecklistId, RunId};
use crate::identity::ActorId;
use crate::maintenance::domain::ScheduleId;
use serde::{Deserialize, Serialize};

/// Events emitted by the workflow engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkflowEvent {
    /// An assignment reached the completed status.
    AssignmentCompleted {
        /// The completed assignment.
        assignment_id: AssignmentId,
        /// The actor who completed it.
        actor_id: ActorId,
    },
    /// A checklist run was finalized into the completion ledger.
    ChecklistFinalized {
        /// The checklist definition that was executed.
        checklist_id: ChecklistId,
        /// The finalized run.
        run_id: RunId,
        /// The actor who finalized the run.
        actor_id: ActorId,
    },
    /// A maintenance schedule's due date has passed.
    MaintenanceOverdue {
        /// The overdue schedule.
        schedule_id: ScheduleId,
    },
    /// A maintenance schedule was completed and rolled forward.
    MaintenanceCompleted {
        /// The completed schedule.
        schedule_id: ScheduleId,
        /// The actor who completed it.
        actor_id: ActorId,
    },
}
