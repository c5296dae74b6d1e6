//! Adapter implementations for the ledger module.

pub mod memory;
