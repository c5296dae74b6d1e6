//! Shared test helpers wiring the engine over in-memory adapters.

use std::sync::Arc;

use chrono::NaiveDate;
use foreman::assignment::adapters::memory::InMemoryAssignmentRepository;
use foreman::assignment::services::AssignmentService;
use foreman::catalog::adapters::memory::InMemoryTemplateRepository;
use foreman::catalog::services::CatalogService;
use foreman::checklist::adapters::memory::InMemoryChecklistRepository;
use foreman::checklist::services::ChecklistService;
use foreman::events::RecordingEventSink;
use foreman::identity::{ActorContext, ActorId, InMemoryMemberDirectory, OrgId, Role};
use foreman::ledger::adapters::memory::InMemoryCompletionLedger;
use foreman::ledger::services::LedgerService;
use foreman::maintenance::adapters::memory::InMemoryScheduleRepository;
use foreman::maintenance::services::MaintenanceService;
use mockable::DefaultClock;

/// Assignment service wired over in-memory adapters.
pub type Assignments = AssignmentService<
    InMemoryTemplateRepository,
    InMemoryAssignmentRepository,
    InMemoryMemberDirectory,
    InMemoryCompletionLedger,
    RecordingEventSink,
    DefaultClock,
>;

/// Checklist service wired over in-memory adapters.
pub type Checklists = ChecklistService<
    InMemoryChecklistRepository,
    InMemoryCompletionLedger,
    RecordingEventSink,
    DefaultClock,
>;

/// Maintenance service wired over in-memory adapters.
pub type Maintenance = MaintenanceService<
    InMemoryScheduleRepository,
    InMemoryCompletionLedger,
    RecordingEventSink,
    DefaultClock,
>;

/// A fully wired engine instance sharing one ledger and event sink, with
/// a manager and a member registered in the same organization.
pub struct Workspace {
    /// Template catalog service.
    pub catalog: CatalogService<InMemoryTemplateRepository, DefaultClock>,
    /// Assignment lifecycle service.
    pub assignments: Assignments,
    /// Checklist execution service.
    pub checklists: Checklists,
    /// Maintenance scheduling service.
    pub maintenance: Maintenance,
    /// Completion ledger service.
    pub ledger: LedgerService<InMemoryCompletionLedger, DefaultClock>,
    /// Manager context.
    pub manager: ActorContext,
    /// Member context in the manager's organization.
    pub member: ActorContext,
    /// The shared ledger adapter, for out-of-band assertions.
    pub ledger_store: Arc<InMemoryCompletionLedger>,
    /// The shared event sink, for out-of-band assertions.
    pub events: Arc<RecordingEventSink>,
}

impl Workspace {
    /// Wires every service over fresh in-memory adapters.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let templates = Arc::new(InMemoryTemplateRepository::new());
        let assignments = Arc::new(InMemoryAssignmentRepository::new());
        let checklists = Arc::new(InMemoryChecklistRepository::new());
        let schedules = Arc::new(InMemoryScheduleRepository::new());
        let directory = Arc::new(InMemoryMemberDirectory::new());
        let ledger_store = Arc::new(InMemoryCompletionLedger::new());
        let events = Arc::new(RecordingEventSink::new());

        let org = OrgId::new();
        let manager = ActorContext::new(ActorId::new(), Role::Manager, org);
        let member = ActorContext::new(ActorId::new(), Role::Member, org);
        directory
            .add_member(org, manager.actor_id)
            .expect("register manager");
        directory
            .add_member(org, member.actor_id)
            .expect("register member");

        Self {
            catalog: CatalogService::new(Arc::clone(&templates), Arc::clone(&clock)),
            assignments: AssignmentService::new(
                templates,
                assignments,
                directory,
                Arc::clone(&ledger_store),
                Arc::clone(&events),
                Arc::clone(&clock),
            ),
            checklists: ChecklistService::new(
                checklists,
                Arc::clone(&ledger_store),
                Arc::clone(&events),
                Arc::clone(&clock),
            ),
            maintenance: MaintenanceService::new(
                schedules,
                Arc::clone(&ledger_store),
                Arc::clone(&events),
                Arc::clone(&clock),
            ),
            ledger: LedgerService::new(Arc::clone(&ledger_store), clock),
            manager,
            member,
            ledger_store,
            events,
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Date helper for readable test fixtures.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
