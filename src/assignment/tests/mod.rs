//! Unit tests for the assignment module.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod recurrence_tests;

use crate::assignment::domain::{
    AssignmentDetails, Priority, Recurrence, TaskAssignment, TemplateSnapshot,
};
use crate::catalog::domain::{TaskType, TemplateId};
use crate::identity::{ActorContext, ActorId, OrgId, Role};
use chrono::NaiveDate;
use mockable::Clock;

/// Builds an assignment owned by the given contexts for domain tests.
fn assignment_between(
    assigner: &ActorContext,
    assignee: ActorId,
    due_date: NaiveDate,
    recurrence: Recurrence,
    clock: &impl Clock,
) -> TaskAssignment {
    let details = AssignmentDetails {
        organization_id: assigner.organization_id,
        template_id: TemplateId::new(),
        template: TemplateSnapshot {
            name: "Open registers".to_owned(),
            task_type: TaskType::Opening,
            estimated_duration_minutes: 15,
        },
        assignee,
        assigner: assigner.actor_id,
        due_date,
        due_time: None,
        priority: Priority::Medium,
        recurrence,
        notes: None,
    };
    TaskAssignment::new(details, clock)
}

/// Manager context fixture helper shared across test modules.
fn manager_ctx() -> ActorContext {
    ActorContext::new(ActorId::new(), Role::Manager, OrgId::new())
}

/// Member context in the same organization as the given context.
fn member_in(org_ctx: &ActorContext) -> ActorContext {
    ActorContext::new(ActorId::new(), Role::Member, org_ctx.organization_id)
}

/// Date helper for readable test fixtures.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
