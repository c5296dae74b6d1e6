//! Adapter implementations for the assignment module.

pub mod memory;
