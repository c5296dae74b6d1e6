//! Task template aggregate and task categorisation.

use super::{CatalogDomainError, TemplateId};
use crate::identity::OrgId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::ParseTaskTypeError;

/// Category of operational work a template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Store opening duties.
    Opening,
    /// Store closing duties.
    Closing,
    /// Cleaning work.
    Cleaning,
    /// Stock counting and restocking.
    Inventory,
    /// Equipment upkeep.
    Maintenance,
    /// Anything that does not fit a predefined category.
    Custom,
}

impl TaskType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Cleaning => "cleaning",
            Self::Inventory => "inventory",
            Self::Maintenance => "maintenance",
            Self::Custom => "custom",
        }
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "opening" => Ok(Self::Opening),
            "closing" => Ok(Self::Closing),
            "cleaning" => Ok(Self::Cleaning),
            "inventory" => Ok(Self::Inventory),
            "maintenance" => Ok(Self::Maintenance),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}

/// Reusable task definition owned by an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTemplate {
    id: TemplateId,
    organization_id: OrgId,
    name: String,
    description: Option<String>,
    task_type: TaskType,
    estimated_duration_minutes: u32,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TaskTemplate {
    /// Creates a new active template.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyTemplateName`] when the name is
    /// blank and [`CatalogDomainError::ZeroEstimatedDuration`] when the
    /// estimate is zero minutes.
    pub fn new(
        organization_id: OrgId,
        name: impl Into<String>,
        task_type: TaskType,
        estimated_duration_minutes: u32,
        clock: &impl Clock,
    ) -> Result<Self, CatalogDomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CatalogDomainError::EmptyTemplateName);
        }
        if estimated_duration_minutes == 0 {
            return Err(CatalogDomainError::ZeroEstimatedDuration);
        }

        Ok(Self {
            id: TemplateId::new(),
            organization_id,
            name: trimmed.to_owned(),
            description: None,
            task_type,
            estimated_duration_minutes,
            is_active: true,
            created_at: clock.utc(),
        })
    }

    /// Sets the template description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrgId {
        self.organization_id
    }

    /// Returns the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the template description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task category.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the estimated duration in minutes.
    #[must_use]
    pub const fn estimated_duration_minutes(&self) -> u32 {
        self.estimated_duration_minutes
    }

    /// Returns whether the template can still be assigned from.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Soft-deactivates the template. Existing assignments keep their
    /// snapshot; new assignments can no longer be created from it.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
