//! End-to-end maintenance workflow over the in-memory adapters.

use super::helpers::Workspace;
use chrono::{Days, Utc};
use foreman::assignment::domain::Priority;
use foreman::events::WorkflowEvent;
use foreman::maintenance::domain::{
    DueState, FrequencyInterval, FrequencyType, MaintenanceType,
};
use foreman::maintenance::services::ScheduleMaintenanceRequest;
use rstest::rstest;

fn days_from_today(days: u64) -> chrono::NaiveDate {
    Utc::now()
        .date_naive()
        .checked_add_days(Days::new(days))
        .expect("valid test date")
}

fn days_before_today(days: u64) -> chrono::NaiveDate {
    Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(days))
        .expect("valid test date")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_rolls_the_cadence_and_reaches_the_ledger() {
    let ws = Workspace::new();
    let due = days_from_today(2);
    let schedule = ws
        .maintenance
        .schedule(
            &ws.manager,
            ScheduleMaintenanceRequest::new(
                "Fryer",
                MaintenanceType::Preventive,
                FrequencyType::Weekly,
                FrequencyInterval::new(2).expect("positive interval"),
                due,
            )
            .with_assignee(ws.member.actor_id)
            .with_priority(Priority::Urgent)
            .with_estimated_duration(60),
        )
        .await
        .expect("scheduling should succeed");

    let completed = ws
        .maintenance
        .complete(&ws.member, schedule.id())
        .await
        .expect("complete should succeed");
    assert_eq!(
        completed.next_due_date(),
        due.checked_add_days(Days::new(14)).expect("valid date")
    );

    assert_eq!(ws.ledger_store.len(), 1);
    assert!(ws.events.events().contains(&WorkflowEvent::MaintenanceCompleted {
        schedule_id: schedule.id(),
        actor_id: ws.member.actor_id,
    }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_surface_derived_urgency() {
    let ws = Workspace::new();
    for (equipment, due) in [
        ("Overdue oven", days_before_today(1)),
        ("Due-soon freezer", days_from_today(3)),
        ("Distant HVAC", days_from_today(60)),
    ] {
        ws.maintenance
            .schedule(
                &ws.manager,
                ScheduleMaintenanceRequest::new(
                    equipment,
                    MaintenanceType::Inspection,
                    FrequencyType::Monthly,
                    FrequencyInterval::default(),
                    due,
                ),
            )
            .await
            .expect("scheduling should succeed");
    }

    let reports = ws
        .maintenance
        .list(&ws.member)
        .await
        .expect("listing should succeed");
    let states: Vec<(&str, DueState)> = reports
        .iter()
        .map(|report| (report.schedule.equipment_name(), report.due_state))
        .collect();
    assert_eq!(
        states,
        vec![
            ("Overdue oven", DueState::Overdue),
            ("Due-soon freezer", DueState::DueSoon),
            ("Distant HVAC", DueState::Scheduled),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_sweep_emits_events_without_touching_state() {
    let ws = Workspace::new();
    let overdue = ws
        .maintenance
        .schedule(
            &ws.manager,
            ScheduleMaintenanceRequest::new(
                "Ice machine",
                MaintenanceType::Corrective,
                FrequencyType::Daily,
                FrequencyInterval::default(),
                days_before_today(2),
            ),
        )
        .await
        .expect("scheduling should succeed");

    let flagged = ws
        .maintenance
        .sweep_overdue(&ws.manager)
        .await
        .expect("sweep should succeed");
    assert_eq!(flagged.len(), 1);
    assert_eq!(
        ws.events.events(),
        vec![WorkflowEvent::MaintenanceOverdue {
            schedule_id: overdue.id(),
        }]
    );

    let reports = ws
        .maintenance
        .list(&ws.manager)
        .await
        .expect("listing should succeed");
    assert_eq!(reports[0].schedule, overdue);
    assert!(ws.ledger_store.is_empty());
}
