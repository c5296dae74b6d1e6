//! Checklist definition and execution engine.
//!
//! Holds ordered checklist items with per-item evidence requirements and
//! runs timed executions that gate completion on those requirements. A run
//! is an ephemeral value object held by the caller; nothing is persisted
//! until the run is finalized into the completion ledger. The module
//! follows hexagonal architecture:
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
