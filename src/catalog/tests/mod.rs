//! Unit tests for the catalog module.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
