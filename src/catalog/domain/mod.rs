//! Domain model for the task template catalog.

mod error;
mod ids;
mod template;

pub use error::{CatalogDomainError, ParseTaskTypeError};
pub use ids::TemplateId;
pub use template::{TaskTemplate, TaskType};
