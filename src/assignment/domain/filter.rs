//! Listing filter for assignments.

use super::{EffectiveStatus, TaskAssignment};
use crate::identity::ActorId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter for assignment listings.
///
/// The service narrows the assignee clause for non-managers before the
/// filter reaches a repository, which is how individual contributors only
/// ever see their own work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentFilter {
    assignee: Option<ActorId>,
    status: Option<EffectiveStatus>,
    search: Option<String>,
}

impl AssignmentFilter {
    /// Creates an empty filter matching every active assignment.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            assignee: None,
            status: None,
            search: None,
        }
    }

    /// Narrows to one assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: ActorId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Narrows to one effective status. [`EffectiveStatus::Pending`] and
    /// [`EffectiveStatus::InProgress`] match only assignments that are not
    /// yet past due; [`EffectiveStatus::Overdue`] matches past-due open
    /// assignments.
    #[must_use]
    pub const fn with_status(mut self, status: EffectiveStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Narrows to assignments whose template name or notes contain the
    /// given text, case-insensitively.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns the assignee clause, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<ActorId> {
        self.assignee
    }

    /// Returns `true` when the assignment satisfies every filter clause.
    #[must_use]
    pub fn matches(&self, assignment: &TaskAssignment, today: NaiveDate) -> bool {
        if let Some(assignee) = self.assignee
            && assignment.assignee() != assignee
        {
            return false;
        }
        if let Some(status) = self.status
            && assignment.effective_status(today) != status
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let name_hit = assignment.template().name.to_lowercase().contains(&needle);
            let notes_hit = assignment
                .notes()
                .is_some_and(|notes| notes.to_lowercase().contains(&needle));
            if !name_hit && !notes_hit {
                return false;
            }
        }
        true
    }
}
