//! Orchestration services for the catalog module.

mod catalog;

pub use catalog::{CatalogError, CatalogResult, CatalogService, CreateTemplateRequest};
