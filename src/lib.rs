//! Foreman: task and checklist workflow engine.
//!
//! This crate implements the scheduling and state-machine core of an
//! operations platform for retail and service businesses: assignment of
//! recurring work to personnel, execution of evidence-gated checklists,
//! calendar recurrence for equipment maintenance, and an append-only ledger
//! of completed work.
//!
//! # Architecture
//!
//! Foreman follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory by default;
//!   embedding hosts supply their own persistence)
//!
//! # Modules
//!
//! - [`catalog`]: Reusable task template definitions
//! - [`assignment`]: Assignment creation, status transitions, recurrence
//! - [`checklist`]: Checklist definitions and gated execution runs
//! - [`maintenance`]: Calendar-based equipment maintenance scheduling
//! - [`ledger`]: Append-only completion records with verification
//! - [`identity`]: Actor context supplied by the authorization collaborator
//! - [`events`]: Domain events handed to the notification collaborator

pub mod assignment;
pub mod catalog;
pub mod checklist;
pub mod events;
pub mod identity;
pub mod ledger;
pub mod maintenance;
pub mod version;
