//! Completion ledger.
//!
//! Append-only record of finished work. Every completed assignment,
//! finalized checklist run, and completed maintenance schedule lands here
//! as one row carrying duration, optional evidence, and optional manager
//! verification. Verification is the only permitted post-creation
//! mutation. The module follows hexagonal architecture:
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
