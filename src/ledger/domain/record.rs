//! Completion record aggregate and its validated scalar types.

use super::{LedgerDomainError, RecordId};
use crate::assignment::domain::AssignmentId;
use crate::checklist::domain::ChecklistId;
use crate::identity::{ActorId, OrgId};
use crate::maintenance::domain::ScheduleId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tagged reference to the work item a record completes.
///
/// Exactly one reference, enforced by the type system rather than by a
/// pair of nullable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CompletionTarget {
    /// A task assignment was completed.
    Assignment(AssignmentId),
    /// A checklist run was finalized.
    Checklist(ChecklistId),
    /// A maintenance schedule was serviced.
    Maintenance(ScheduleId),
}

impl CompletionTarget {
    /// Returns the target's kind without its identifier.
    #[must_use]
    pub const fn kind(&self) -> TargetKind {
        match self {
            Self::Assignment(_) => TargetKind::Assignment,
            Self::Checklist(_) => TargetKind::Checklist,
            Self::Maintenance(_) => TargetKind::Maintenance,
        }
    }
}

/// Kind discriminant of a [`CompletionTarget`], used in ledger filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Task assignment completions.
    Assignment,
    /// Checklist run completions.
    Checklist,
    /// Maintenance completions.
    Maintenance,
}

/// Opaque reference to a photo held by the evidence storage collaborator.
///
/// The engine stores the reference verbatim and never inspects content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Creates a validated photo reference.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::EmptyPhotoRef`] when the reference is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, LedgerDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(LedgerDomainError::EmptyPhotoRef);
        }
        Ok(Self(raw))
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Manager quality assessment between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityScore(u8);

impl QualityScore {
    /// Creates a validated quality score.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::InvalidQualityScore`] when the value is
    /// outside 1-5.
    pub const fn new(value: u8) -> Result<Self, LedgerDomainError> {
        if value == 0 || value > 5 {
            return Err(LedgerDomainError::InvalidQualityScore(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Write-once manager verification of a completion record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// The manager who verified the work.
    pub verified_by: ActorId,
    /// When the verification happened.
    pub verified_at: DateTime<Utc>,
}

/// One row of the append-only completion ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    id: RecordId,
    organization_id: OrgId,
    target: CompletionTarget,
    completed_by: ActorId,
    completed_at: DateTime<Utc>,
    duration_minutes: i64,
    notes: Option<String>,
    photo: Option<PhotoRef>,
    quality_score: Option<QualityScore>,
    verification: Option<Verification>,
}

impl CompletionRecord {
    /// Creates an unverified completion record timestamped now.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::NegativeDuration`] when the duration is
    /// negative.
    pub fn new(
        organization_id: OrgId,
        target: CompletionTarget,
        completed_by: ActorId,
        duration_minutes: i64,
        clock: &impl Clock,
    ) -> Result<Self, LedgerDomainError> {
        if duration_minutes < 0 {
            return Err(LedgerDomainError::NegativeDuration(duration_minutes));
        }

        Ok(Self {
            id: RecordId::new(),
            organization_id,
            target,
            completed_by,
            completed_at: clock.utc(),
            duration_minutes,
            notes: None,
            photo: None,
            quality_score: None,
            verification: None,
        })
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attaches a photo evidence reference.
    #[must_use]
    pub fn with_photo(mut self, photo: PhotoRef) -> Self {
        self.photo = Some(photo);
        self
    }

    /// Sets the quality score.
    #[must_use]
    pub const fn with_quality_score(mut self, score: QualityScore) -> Self {
        self.quality_score = Some(score);
        self
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn organization_id(&self) -> OrgId {
        self.organization_id
    }

    /// Returns the completed work item reference.
    #[must_use]
    pub const fn target(&self) -> CompletionTarget {
        self.target
    }

    /// Returns the actor who completed the work.
    #[must_use]
    pub const fn completed_by(&self) -> ActorId {
        self.completed_by
    }

    /// Returns the completion timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Returns the recorded duration in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// Returns the free-form notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the photo evidence reference, if any.
    #[must_use]
    pub const fn photo(&self) -> Option<&PhotoRef> {
        self.photo.as_ref()
    }

    /// Returns the quality score, if any.
    #[must_use]
    pub const fn quality_score(&self) -> Option<QualityScore> {
        self.quality_score
    }

    /// Returns the verification, if the record has been verified.
    #[must_use]
    pub const fn verification(&self) -> Option<&Verification> {
        self.verification.as_ref()
    }

    /// Marks the record as verified. Write-once.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::AlreadyVerified`] when the record
    /// already carries a verification.
    pub fn verify(
        &mut self,
        verified_by: ActorId,
        clock: &impl Clock,
    ) -> Result<(), LedgerDomainError> {
        if self.verification.is_some() {
            return Err(LedgerDomainError::AlreadyVerified(self.id));
        }
        self.verification = Some(Verification {
            verified_by,
            verified_at: clock.utc(),
        });
        Ok(())
    }
}
