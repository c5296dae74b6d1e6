//! Ephemeral checklist execution sessions.

use super::{
    ChecklistDefinition, ChecklistDomainError, ChecklistId, ChecklistItem, ItemId, Requirement,
    RunId,
};
use crate::ledger::domain::{PhotoRef, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transient completion state for one item within a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProgress {
    completed: bool,
    notes: Option<String>,
    photo: Option<PhotoRef>,
}

impl ItemProgress {
    /// Returns whether the item has been marked complete.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the notes recorded against the item, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the photo evidence recorded against the item, if any.
    #[must_use]
    pub const fn photo(&self) -> Option<&PhotoRef> {
        self.photo.as_ref()
    }
}

/// Requested change to one item's completion state.
///
/// Fields left unset keep their current value, so a caller can attach
/// evidence first and mark the item complete in a later call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    completed: Option<bool>,
    notes: Option<String>,
    photo: Option<PhotoRef>,
}

impl ItemUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the item complete.
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.completed = Some(true);
        self
    }

    /// Reverts the item to uncompleted.
    #[must_use]
    pub const fn uncompleted(mut self) -> Self {
        self.completed = Some(false);
        self
    }

    /// Records notes against the item.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attaches photo evidence to the item.
    #[must_use]
    pub fn with_photo(mut self, photo: PhotoRef) -> Self {
        self.photo = Some(photo);
        self
    }
}

/// One slot in a run: the item definition snapshot plus its progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RunSlot {
    item: ChecklistItem,
    progress: ItemProgress,
}

/// One timed execution attempt of a checklist.
///
/// The run is a value object held by the caller. Nothing is persisted
/// until it is finalized into the completion ledger; abandoning a run
/// has no side effect. Two runs of the same checklist never share state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRun {
    run_id: RunId,
    checklist_id: ChecklistId,
    started_at: DateTime<Utc>,
    slots: Vec<RunSlot>,
    finalized: Option<RecordId>,
}

impl ChecklistRun {
    /// Opens a run over the checklist's items, all uncompleted.
    #[must_use]
    pub fn start(definition: &ChecklistDefinition, started_at: DateTime<Utc>) -> Self {
        let slots = definition
            .items()
            .iter()
            .map(|item| RunSlot {
                item: item.clone(),
                progress: ItemProgress::default(),
            })
            .collect();

        Self {
            run_id: RunId::new(),
            checklist_id: definition.id(),
            started_at,
            slots,
            finalized: None,
        }
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Returns the checklist this run executes.
    #[must_use]
    pub const fn checklist_id(&self) -> ChecklistId {
        self.checklist_id
    }

    /// Returns when the run was opened.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the ledger record the run was finalized into, if any.
    #[must_use]
    pub const fn finalized_record(&self) -> Option<RecordId> {
        self.finalized
    }

    /// Returns the current progress for an item.
    #[must_use]
    pub fn progress(&self, item_id: ItemId) -> Option<&ItemProgress> {
        self.slots
            .iter()
            .find(|slot| slot.item.id() == item_id)
            .map(|slot| &slot.progress)
    }

    /// Applies an update to one item's completion state.
    ///
    /// Marking an item complete is gated on its declared evidence
    /// requirements: the call checks the notes and photo state as they
    /// would be after the update, so evidence supplied in the same call
    /// counts.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::UnknownItem`] when the item is not
    /// part of this run and [`ChecklistDomainError::PreconditionNotMet`]
    /// when completion is requested without the required evidence.
    pub fn set_item_state(
        &mut self,
        item_id: ItemId,
        update: ItemUpdate,
    ) -> Result<(), ChecklistDomainError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.item.id() == item_id)
            .ok_or(ChecklistDomainError::UnknownItem(item_id))?;

        let notes = update.notes.or_else(|| slot.progress.notes.clone());
        let photo = update.photo.or_else(|| slot.progress.photo.clone());
        let completed = update.completed.unwrap_or(slot.progress.completed);

        if completed {
            let has_notes = notes.as_deref().is_some_and(|n| !n.trim().is_empty());
            if slot.item.requires_note() && !has_notes {
                return Err(ChecklistDomainError::PreconditionNotMet {
                    item_id,
                    requirement: Requirement::Note,
                });
            }
            if slot.item.requires_photo() && photo.is_none() {
                return Err(ChecklistDomainError::PreconditionNotMet {
                    item_id,
                    requirement: Requirement::Photo,
                });
            }
        }

        slot.progress = ItemProgress {
            completed,
            notes,
            photo,
        };
        Ok(())
    }

    /// Returns the required items not yet completed, in display order.
    #[must_use]
    pub fn unmet_required(&self) -> Vec<ItemId> {
        self.slots
            .iter()
            .filter(|slot| slot.item.is_required() && !slot.progress.completed)
            .map(|slot| slot.item.id())
            .collect()
    }

    /// Returns whether every required item has been completed.
    #[must_use]
    pub fn can_complete(&self) -> bool {
        self.unmet_required().is_empty()
    }

    /// Returns the run duration in whole minutes, never negative.
    #[must_use]
    pub fn duration_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_minutes().max(0)
    }

    /// Latches the run as finalized into the given ledger record.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub(crate) fn mark_finalized(&mut self, record_id: RecordId) {
        self.finalized = Some(record_id);
    }
}
