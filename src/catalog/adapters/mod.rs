//! Adapter implementations for the catalog module.

pub mod memory;
