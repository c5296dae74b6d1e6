//! Domain model for task assignments.
//!
//! Models assignment creation from template snapshots, validated status
//! transitions, derived overdue state, and calendar-based recurrence while
//! keeping infrastructure concerns outside the domain boundary.

mod assignment;
mod error;
mod filter;
mod ids;
mod status;

pub use assignment::{AssignmentDetails, TaskAssignment, TemplateSnapshot};
pub use error::{
    AssignmentDomainError, ParseAssignmentStatusError, ParsePriorityError, ParseRecurrenceError,
};
pub use filter::AssignmentFilter;
pub use ids::AssignmentId;
pub use status::{AssignmentStatus, EffectiveStatus, Priority, Recurrence};
