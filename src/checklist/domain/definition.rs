//! Checklist definition aggregate and its ordered items.

use super::{ChecklistDomainError, ChecklistId, ItemId, ParseChecklistTypeError};
use crate::identity::OrgId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Category of work a checklist structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistType {
    /// Store opening procedures.
    Opening,
    /// Store closing procedures.
    Closing,
    /// Equipment or facility maintenance procedures.
    Maintenance,
    /// Anything that does not fit a predefined category.
    Custom,
}

impl ChecklistType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Maintenance => "maintenance",
            Self::Custom => "custom",
        }
    }
}

impl TryFrom<&str> for ChecklistType {
    type Error = ParseChecklistTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "opening" => Ok(Self::Opening),
            "closing" => Ok(Self::Closing),
            "maintenance" => Ok(Self::Maintenance),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseChecklistTypeError(value.to_owned())),
        }
    }
}

/// One step in a checklist, with its evidence requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    id: ItemId,
    item_text: String,
    description: Option<String>,
    is_required: bool,
    requires_photo: bool,
    requires_note: bool,
    display_order: u32,
}

impl ChecklistItem {
    /// Creates an optional item with no evidence requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::EmptyItemText`] when the text is
    /// blank.
    pub fn new(
        item_text: impl Into<String>,
        display_order: u32,
    ) -> Result<Self, ChecklistDomainError> {
        let item_text = item_text.into();
        let trimmed = item_text.trim();
        if trimmed.is_empty() {
            return Err(ChecklistDomainError::EmptyItemText);
        }

        Ok(Self {
            id: ItemId::new(),
            item_text: trimmed.to_owned(),
            description: None,
            is_required: false,
            requires_photo: false,
            requires_note: false,
            display_order,
        })
    }

    /// Sets the longer item description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the item as mandatory for finalization.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Requires a photo reference before the item can be completed.
    #[must_use]
    pub const fn with_photo_required(mut self) -> Self {
        self.requires_photo = true;
        self
    }

    /// Requires non-empty notes before the item can be completed.
    #[must_use]
    pub const fn with_note_required(mut self) -> Self {
        self.requires_note = true;
        self
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item text.
    #[must_use]
    pub fn item_text(&self) -> &str {
        &self.item_text
    }

    /// Returns the item description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the item must be completed before finalization.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.is_required
    }

    /// Returns whether completion requires a photo reference.
    #[must_use]
    pub const fn requires_photo(&self) -> bool {
        self.requires_photo
    }

    /// Returns whether completion requires non-empty notes.
    #[must_use]
    pub const fn requires_note(&self) -> bool {
        self.requires_note
    }

    /// Returns the item's position in the checklist.
    #[must_use]
    pub const fn display_order(&self) -> u32 {
        self.display_order
    }
}

/// Checklist aggregate owned by an organization.
///
/// The definition owns its items, so creating a checklist with its items
/// is a single store operation with no partially-created intermediate
/// state. Items are immutable once the definition exists; retire the
/// whole definition with [`ChecklistDefinition::deactivate`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistDefinition {
    id: ChecklistId,
    organization_id: OrgId,
    name: String,
    checklist_type: ChecklistType,
    store_scope: Option<String>,
    items: Vec<ChecklistItem>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl ChecklistDefinition {
    /// Creates a new active checklist, sorting items by display order.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::EmptyName`] when the name is blank
    /// and [`ChecklistDomainError::NoItems`] when no items are supplied.
    pub fn new(
        organization_id: OrgId,
        name: impl Into<String>,
        checklist_type: ChecklistType,
        mut items: Vec<ChecklistItem>,
        clock: &impl Clock,
    ) -> Result<Self, ChecklistDomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ChecklistDomainError::EmptyName);
        }
        if items.is_empty() {
            return Err(ChecklistDomainError::NoItems);
        }

        items.sort_by_key(ChecklistItem::display_order);

        Ok(Self {
            id: ChecklistId::new(),
            organization_id,
            name: trimmed.to_owned(),
            checklist_type,
            store_scope: None,
            items,
            is_active: true,
            created_at: clock.utc(),
        })
    }

    /// Scopes the checklist to a single store location.
    #[must_use]
    pub fn with_store_scope(mut self, store: impl Into<String>) -> Self {
        self.store_scope = Some(store.into());
        self
    }

    /// Returns the checklist identifier.
    #[must_use]
    pub const fn id(&self) -> ChecklistId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrgId {
        self.organization_id
    }

    /// Returns the checklist name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the checklist category.
    #[must_use]
    pub const fn checklist_type(&self) -> ChecklistType {
        self.checklist_type
    }

    /// Returns the store scope, if the checklist is location-specific.
    #[must_use]
    pub fn store_scope(&self) -> Option<&str> {
        self.store_scope.as_deref()
    }

    /// Returns the items in display order.
    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn item(&self, item_id: ItemId) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    /// Returns whether runs can still be started from this checklist.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Soft-deactivates the checklist. Completed runs keep their ledger
    /// records; new runs can no longer be started.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
