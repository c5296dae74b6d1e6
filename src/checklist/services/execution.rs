//! Service layer for checklist definition management and run execution.

use crate::checklist::{
    domain::{
        ChecklistDefinition, ChecklistDomainError, ChecklistId, ChecklistItem, ChecklistRun,
        ChecklistType,
    },
    ports::{ChecklistRepository, ChecklistRepositoryError},
};
use crate::events::{EventSink, WorkflowEvent};
use crate::identity::{ActorContext, ActorId};
use crate::ledger::{
    domain::{CompletionRecord, CompletionTarget, LedgerDomainError, RecordId},
    ports::{CompletionLedger, LedgerRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a checklist definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefineChecklistRequest {
    name: String,
    checklist_type: ChecklistType,
    store_scope: Option<String>,
    items: Vec<ChecklistItem>,
}

impl DefineChecklistRequest {
    /// Creates a request with required checklist fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        checklist_type: ChecklistType,
        items: Vec<ChecklistItem>,
    ) -> Self {
        Self {
            name: name.into(),
            checklist_type,
            store_scope: None,
            items,
        }
    }

    /// Scopes the checklist to a single store location.
    #[must_use]
    pub fn with_store_scope(mut self, store: impl Into<String>) -> Self {
        self.store_scope = Some(store.into());
        self
    }
}

/// Service-level errors for checklist operations.
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// Domain validation or execution gating failed.
    #[error(transparent)]
    Domain(#[from] ChecklistDomainError),
    /// Checklist repository operation failed.
    #[error(transparent)]
    Repository(#[from] ChecklistRepositoryError),
    /// Completion ledger append failed.
    #[error(transparent)]
    Ledger(#[from] LedgerRepositoryError),
    /// Completion record construction failed.
    #[error(transparent)]
    LedgerDomain(#[from] LedgerDomainError),
    /// The checklist does not resolve within the caller's organization.
    #[error("checklist {0} does not resolve within the caller's organization")]
    ChecklistNotFound(ChecklistId),
    /// The caller lacks permission for the operation.
    #[error("actor {0} is not permitted to manage checklists")]
    PermissionDenied(ActorId),
}

/// Result type for checklist service operations.
pub type ChecklistResult<T> = Result<T, ChecklistError>;

/// Checklist orchestration service.
#[derive(Clone)]
pub struct ChecklistService<R, L, E, C>
where
    R: ChecklistRepository,
    L: CompletionLedger,
    E: EventSink,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ledger: Arc<L>,
    events: Arc<E>,
    clock: Arc<C>,
}

impl<R, L, E, C> ChecklistService<R, L, E, C>
where
    R: ChecklistRepository,
    L: CompletionLedger,
    E: EventSink,
    C: Clock + Send + Sync,
{
    /// Creates a new checklist service.
    #[must_use]
    pub const fn new(repository: Arc<R>, ledger: Arc<L>, events: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            repository,
            ledger,
            events,
            clock,
        }
    }

    /// Creates a checklist definition with its items in one store.
    /// Managers only.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::PermissionDenied`] for non-managers,
    /// [`ChecklistError::Domain`] when the definition is invalid, or a
    /// repository error when persistence rejects the checklist.
    pub async fn define(
        &self,
        ctx: &ActorContext,
        request: DefineChecklistRequest,
    ) -> ChecklistResult<ChecklistDefinition> {
        if !ctx.is_manager() {
            return Err(ChecklistError::PermissionDenied(ctx.actor_id));
        }

        let mut definition = ChecklistDefinition::new(
            ctx.organization_id,
            request.name,
            request.checklist_type,
            request.items,
            &*self.clock,
        )?;
        if let Some(store) = request.store_scope {
            definition = definition.with_store_scope(store);
        }
        self.repository.store(&definition).await?;
        debug!(checklist_id = %definition.id(), "checklist defined");
        Ok(definition)
    }

    /// Soft-deactivates a checklist. Managers only.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::PermissionDenied`] for non-managers,
    /// [`ChecklistError::ChecklistNotFound`] when the checklist does not
    /// resolve, or a repository error when the update fails.
    pub async fn deactivate(
        &self,
        ctx: &ActorContext,
        id: ChecklistId,
    ) -> ChecklistResult<ChecklistDefinition> {
        if !ctx.is_manager() {
            return Err(ChecklistError::PermissionDenied(ctx.actor_id));
        }

        let mut definition = self.load(ctx, id).await?;
        definition.deactivate();
        self.repository.update(&definition).await?;
        debug!(checklist_id = %id, "checklist deactivated");
        Ok(definition)
    }

    /// Lists the organization's active checklists, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self, ctx: &ActorContext) -> ChecklistResult<Vec<ChecklistDefinition>> {
        Ok(self.repository.list_active(ctx.organization_id).await?)
    }

    /// Opens a timed run over an active checklist.
    ///
    /// The run is returned to the caller as a value object; abandoning it
    /// before [`ChecklistService::finalize`] has no persisted side effect.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::ChecklistNotFound`] when the checklist
    /// does not resolve and [`ChecklistDomainError::Inactive`] when it has
    /// been deactivated.
    pub async fn start_run(
        &self,
        ctx: &ActorContext,
        id: ChecklistId,
    ) -> ChecklistResult<ChecklistRun> {
        let definition = self.load(ctx, id).await?;
        if !definition.is_active() {
            return Err(ChecklistDomainError::Inactive(id).into());
        }
        let run = ChecklistRun::start(&definition, self.clock.utc());
        debug!(checklist_id = %id, run_id = %run.run_id(), "checklist run started");
        Ok(run)
    }

    /// Finalizes a run into one completion record.
    ///
    /// Finalizing is idempotent: a run that has already been finalized
    /// returns its original record identifier and appends nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistDomainError::Incomplete`] carrying the unmet
    /// item ids while required items are outstanding, or a ledger error
    /// when the append fails.
    pub async fn finalize(
        &self,
        ctx: &ActorContext,
        run: &mut ChecklistRun,
    ) -> ChecklistResult<RecordId> {
        if let Some(record_id) = run.finalized_record() {
            debug!(run_id = %run.run_id(), "finalize retried on a finalized run");
            return Ok(record_id);
        }

        let unmet = run.unmet_required();
        if !unmet.is_empty() {
            return Err(ChecklistDomainError::Incomplete { unmet }.into());
        }

        let now = self.clock.utc();
        let record = CompletionRecord::new(
            ctx.organization_id,
            CompletionTarget::Checklist(run.checklist_id()),
            ctx.actor_id,
            run.duration_minutes(now),
            &*self.clock,
        )?;
        self.ledger.append(&record).await?;
        run.mark_finalized(record.id());

        self.events
            .publish(WorkflowEvent::ChecklistFinalized {
                checklist_id: run.checklist_id(),
                run_id: run.run_id(),
                actor_id: ctx.actor_id,
            })
            .await;
        info!(
            checklist_id = %run.checklist_id(),
            run_id = %run.run_id(),
            record_id = %record.id(),
            "checklist run finalized"
        );
        Ok(record.id())
    }

    async fn load(
        &self,
        ctx: &ActorContext,
        id: ChecklistId,
    ) -> ChecklistResult<ChecklistDefinition> {
        self.repository
            .find_by_id(ctx.organization_id, id)
            .await?
            .ok_or(ChecklistError::ChecklistNotFound(id))
    }
}
