//! Orchestration services for the checklist engine.

mod execution;

pub use execution::{ChecklistError, ChecklistResult, ChecklistService, DefineChecklistRequest};
