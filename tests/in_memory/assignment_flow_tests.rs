//! End-to-end assignment workflow over the in-memory adapters.

use super::helpers::{Workspace, date};
use chrono::{Duration, Utc};
use foreman::assignment::domain::{AssignmentFilter, AssignmentStatus, Priority, Recurrence};
use foreman::assignment::services::{AssignTaskRequest, AssignmentError};
use foreman::catalog::services::CreateTemplateRequest;
use foreman::catalog::domain::TaskType;
use foreman::events::WorkflowEvent;
use foreman::ledger::domain::{LedgerFilter, TargetKind, TimeRange};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_template_flows_from_catalog_to_completed_ledger_row() {
    let ws = Workspace::new();
    let template = ws
        .catalog
        .create_template(
            &ws.manager,
            CreateTemplateRequest::new("Close registers", TaskType::Closing, 20)
                .with_description("Count, reconcile, and lock the tills"),
        )
        .await
        .expect("template creation should succeed");

    let assignment = ws
        .assignments
        .assign(
            &ws.manager,
            AssignTaskRequest::new(
                template.id(),
                ws.member.actor_id,
                date(2024, 6, 1),
                Priority::High,
            ),
        )
        .await
        .expect("assignment should succeed");
    assert_eq!(assignment.status(), AssignmentStatus::Pending);
    assert_eq!(assignment.template().name, "Close registers");

    ws.assignments
        .start(&ws.member, assignment.id())
        .await
        .expect("start should succeed");
    let outcome = ws
        .assignments
        .complete(&ws.member, assignment.id())
        .await
        .expect("complete should succeed");
    assert_eq!(outcome.completed.status(), AssignmentStatus::Completed);

    let window = TimeRange::new(Utc::now() - Duration::hours(1), Utc::now())
        .expect("valid window");
    let records = ws
        .ledger
        .query(
            &ws.manager,
            &LedgerFilter::for_range(window)
                .with_target_kind(TargetKind::Assignment)
                .with_completed_by(ws.member.actor_id),
        )
        .await
        .expect("query should succeed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].duration_minutes(), 20);

    assert!(ws.events.events().contains(&WorkflowEvent::AssignmentCompleted {
        assignment_id: assignment.id(),
        actor_id: ws.member.actor_id,
    }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_deactivated_template_no_longer_accepts_assignments() {
    let ws = Workspace::new();
    let template = ws
        .catalog
        .create_template(
            &ws.manager,
            CreateTemplateRequest::new("Mop the floor", TaskType::Cleaning, 25),
        )
        .await
        .expect("template creation should succeed");

    let before = ws
        .assignments
        .assign(
            &ws.manager,
            AssignTaskRequest::new(
                template.id(),
                ws.member.actor_id,
                date(2024, 6, 1),
                Priority::Low,
            ),
        )
        .await
        .expect("assignment should succeed");

    ws.catalog
        .deactivate_template(&ws.manager, template.id())
        .await
        .expect("deactivation should succeed");

    let after = ws
        .assignments
        .assign(
            &ws.manager,
            AssignTaskRequest::new(
                template.id(),
                ws.member.actor_id,
                date(2024, 6, 2),
                Priority::Low,
            ),
        )
        .await;
    assert!(matches!(after, Err(AssignmentError::TemplateInactive(_))));

    // The earlier assignment keeps its snapshot and stays workable.
    let listed = ws
        .assignments
        .list(&ws.member, AssignmentFilter::all())
        .await
        .expect("listing should succeed");
    assert_eq!(listed, vec![before]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn daily_recurrence_chains_across_completions() {
    let ws = Workspace::new();
    let template = ws
        .catalog
        .create_template(
            &ws.manager,
            CreateTemplateRequest::new("Temperature log", TaskType::Opening, 5),
        )
        .await
        .expect("template creation should succeed");

    let first = ws
        .assignments
        .assign(
            &ws.manager,
            AssignTaskRequest::new(
                template.id(),
                ws.member.actor_id,
                date(2024, 2, 28),
                Priority::Medium,
            )
            .with_recurrence(Recurrence::Daily),
        )
        .await
        .expect("assignment should succeed");

    ws.assignments
        .start(&ws.member, first.id())
        .await
        .expect("start should succeed");
    let outcome = ws
        .assignments
        .complete(&ws.member, first.id())
        .await
        .expect("complete should succeed");
    let second = outcome.successor.expect("daily work recurs");
    assert_eq!(second.due_date(), date(2024, 2, 29));

    ws.assignments
        .start(&ws.member, second.id())
        .await
        .expect("start should succeed");
    let outcome = ws
        .assignments
        .complete(&ws.member, second.id())
        .await
        .expect("complete should succeed");
    let third = outcome.successor.expect("daily work recurs");
    assert_eq!(third.due_date(), date(2024, 3, 1));

    assert_eq!(ws.ledger_store.len(), 2);
}
