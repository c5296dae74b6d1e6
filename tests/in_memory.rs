//! In-memory adapter integration tests.
//!
//! Tests are organized into modules by workflow:
//! - `assignment_flow_tests`: template catalog to assignment lifecycle
//! - `checklist_flow_tests`: definition, gated runs, finalization
//! - `maintenance_flow_tests`: scheduling, rollover, overdue sweeps
//! - `ledger_flow_tests`: recording, verification, reporting queries

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

mod in_memory {
    pub mod helpers;

    mod assignment_flow_tests;
    mod checklist_flow_tests;
    mod ledger_flow_tests;
    mod maintenance_flow_tests;
}
