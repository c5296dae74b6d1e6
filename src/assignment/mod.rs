//! Task assignment management.
//!
//! Creates assignment instances from catalog templates, enforces the
//! pending → in-progress → completed status machine, derives overdue state
//! from due dates, and schedules the next occurrence when an assignment
//! recurs. The module follows hexagonal architecture:
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
