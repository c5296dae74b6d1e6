//! Adapter implementations of the checklist ports.

pub mod memory;
