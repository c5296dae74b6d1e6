//! Domain model for checklist definitions and execution runs.

mod definition;
mod error;
mod ids;
mod run;

pub use definition::{ChecklistDefinition, ChecklistItem, ChecklistType};
pub use error::{ChecklistDomainError, ParseChecklistTypeError, Requirement};
pub use ids::{ChecklistId, ItemId, RunId};
pub use run::{ChecklistRun, ItemProgress, ItemUpdate};
