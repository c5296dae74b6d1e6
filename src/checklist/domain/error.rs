//! Error types for checklist domain validation and execution gating.

use super::{ChecklistId, ItemId};
use std::fmt;
use thiserror::Error;

/// Evidence an item demands before it may be marked complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// The item requires a photo reference.
    Photo,
    /// The item requires non-empty notes.
    Note,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Photo => write!(f, "photo"),
            Self::Note => write!(f, "note"),
        }
    }
}

/// Errors returned while constructing or executing checklists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChecklistDomainError {
    /// The checklist name is empty after trimming.
    #[error("checklist name must not be empty")]
    EmptyName,

    /// An item's text is empty after trimming.
    #[error("checklist item text must not be empty")]
    EmptyItemText,

    /// The definition has no items.
    #[error("checklist must contain at least one item")]
    NoItems,

    /// The checklist definition has been deactivated.
    #[error("checklist {0} is no longer active")]
    Inactive(ChecklistId),

    /// The item does not belong to the run's checklist.
    #[error("item {0} does not belong to this checklist run")]
    UnknownItem(ItemId),

    /// Completing the item requires evidence that was not supplied.
    #[error("item {item_id} requires a {requirement} before it can be completed")]
    PreconditionNotMet {
        /// The gated item.
        item_id: ItemId,
        /// The missing evidence.
        requirement: Requirement,
    },

    /// Required items are still outstanding at finalize time.
    #[error("checklist run has {} required item(s) outstanding", unmet.len())]
    Incomplete {
        /// Identifiers of the required items not yet completed.
        unmet: Vec<ItemId>,
    },
}

/// Error returned while parsing checklist types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown checklist type: {0}")]
pub struct ParseChecklistTypeError(pub String);
