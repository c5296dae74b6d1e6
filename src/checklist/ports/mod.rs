//! Port contracts for checklist persistence.

mod repository;

pub use repository::{ChecklistRepository, ChecklistRepositoryError, ChecklistRepositoryResult};
