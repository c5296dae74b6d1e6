//! Member directory port used to resolve assignees within an organization.

use super::{ActorId, OrgId};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Narrow lookup contract over the identity collaborator.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Returns `true` when the actor is a member of the organization.
    async fn is_member(&self, organization_id: OrgId, actor_id: ActorId) -> DirectoryResult<bool>;
}

/// Errors returned by member directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// Collaborator-side failure.
    #[error("directory error: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a collaborator error.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}

/// Thread-safe in-memory member directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberDirectory {
    members: Arc<RwLock<HashSet<(OrgId, ActorId)>>>,
}

impl InMemoryMemberDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an actor as a member of an organization.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Lookup`] when the directory state is
    /// poisoned.
    pub fn add_member(&self, organization_id: OrgId, actor_id: ActorId) -> DirectoryResult<()> {
        let mut members = self
            .members
            .write()
            .map_err(|err| DirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        members.insert((organization_id, actor_id));
        Ok(())
    }
}

#[async_trait]
impl MemberDirectory for InMemoryMemberDirectory {
    async fn is_member(&self, organization_id: OrgId, actor_id: ActorId) -> DirectoryResult<bool> {
        let members = self
            .members
            .read()
            .map_err(|err| DirectoryError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(members.contains(&(organization_id, actor_id)))
    }
}
