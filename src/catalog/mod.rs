//! Task template catalog.
//!
//! Reusable task definitions an organization assigns work from. Templates
//! are read-mostly: managers create and soft-deactivate them, and
//! assignments snapshot template fields at creation so later edits apply
//! only to future assignments. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
