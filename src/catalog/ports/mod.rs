//! Port contracts for the catalog module.

mod repository;

pub use repository::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult};
