//! Actor identity and organization scoping.
//!
//! Authentication, session handling, and role resolution are external
//! collaborators. This module defines the trusted context they supply with
//! every call, plus the narrow directory port used to validate that an
//! actor belongs to an organization.

mod actor;
mod directory;

pub use actor::{ActorContext, ActorId, OrgId, ParseRoleError, Role};
pub use directory::{
    DirectoryError, DirectoryResult, InMemoryMemberDirectory, MemberDirectory,
};
