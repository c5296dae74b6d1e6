//! Unit tests for the ledger module.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
