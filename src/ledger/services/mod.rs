//! Orchestration services for the ledger module.

mod ledger;

pub use ledger::{LedgerError, LedgerResult, LedgerService, NewCompletion};
