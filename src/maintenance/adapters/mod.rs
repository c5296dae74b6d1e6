//! Adapter implementations of the maintenance ports.

pub mod memory;
