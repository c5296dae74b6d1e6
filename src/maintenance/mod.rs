//! Recurring equipment maintenance scheduling.
//!
//! Tracks maintenance schedules with calendar recurrence. Overdue and
//! due-soon states are derived at read time from the next due date, never
//! stored, so no background job is needed for correctness. Completing a
//! schedule records the work in the completion ledger and rolls the due
//! date forward from the previous due date, keeping the cadence stable
//! under early or late completions. The module follows hexagonal
//! architecture:
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
