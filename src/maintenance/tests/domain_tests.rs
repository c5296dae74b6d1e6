//! Domain-level tests for schedules, frequencies, and derived urgency.

use super::{date, manager_ctx, member_in, monthly_schedule};
use crate::maintenance::domain::{
    DueState, FrequencyInterval, FrequencyType, MaintenanceDomainError, MaintenanceType,
};
use crate::version::Version;
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn a_zero_interval_is_rejected() {
    assert_eq!(
        FrequencyInterval::new(0),
        Err(MaintenanceDomainError::ZeroFrequencyInterval)
    );
}

#[rstest]
#[case(FrequencyType::Daily, 1, date(2024, 6, 15), date(2024, 6, 16))]
#[case(FrequencyType::Daily, 10, date(2024, 6, 25), date(2024, 7, 5))]
#[case(FrequencyType::Weekly, 1, date(2024, 6, 15), date(2024, 6, 22))]
#[case(FrequencyType::Weekly, 2, date(2024, 6, 15), date(2024, 6, 29))]
#[case(FrequencyType::Monthly, 1, date(2024, 6, 15), date(2024, 7, 15))]
#[case(FrequencyType::Monthly, 1, date(2024, 1, 31), date(2024, 2, 29))]
#[case(FrequencyType::Monthly, 1, date(2023, 1, 31), date(2023, 2, 28))]
#[case(FrequencyType::Quarterly, 1, date(2024, 11, 30), date(2025, 2, 28))]
#[case(FrequencyType::Yearly, 1, date(2024, 2, 29), date(2025, 2, 28))]
#[case(FrequencyType::Yearly, 2, date(2024, 6, 15), date(2026, 6, 15))]
fn frequencies_advance_with_calendar_clamping(
    #[case] frequency: FrequencyType,
    #[case] interval: u32,
    #[case] from: chrono::NaiveDate,
    #[case] expected: chrono::NaiveDate,
) {
    let step = FrequencyInterval::new(interval).expect("positive interval");
    assert_eq!(frequency.advance(from, step), Some(expected));
}

#[rstest]
fn blank_equipment_names_are_rejected() {
    use crate::maintenance::domain::{MaintenanceSchedule, ScheduleDetails};
    let details = ScheduleDetails {
        organization_id: crate::identity::OrgId::new(),
        equipment_name: "   ".to_owned(),
        maintenance_type: MaintenanceType::Inspection,
        frequency_type: FrequencyType::Weekly,
        frequency_interval: FrequencyInterval::default(),
        next_due_date: date(2024, 6, 15),
        assigned_to: None,
        priority: crate::assignment::domain::Priority::Low,
        estimated_duration_minutes: 10,
        instructions: None,
    };
    assert_eq!(
        MaintenanceSchedule::new(details, &DefaultClock),
        Err(MaintenanceDomainError::EmptyEquipmentName)
    );
}

#[rstest]
#[case(date(2024, 6, 14), DueState::Overdue)]
#[case(date(2024, 6, 15), DueState::DueSoon)]
#[case(date(2024, 6, 22), DueState::DueSoon)]
#[case(date(2024, 6, 23), DueState::Scheduled)]
fn due_state_is_derived_from_today(#[case] due: chrono::NaiveDate, #[case] expected: DueState) {
    let manager = manager_ctx();
    let schedule = monthly_schedule(manager.organization_id, None, due, &DefaultClock);
    let today = date(2024, 6, 15);

    assert_eq!(schedule.due_state(today), expected);
}

#[rstest]
fn overdue_and_due_soon_are_mutually_exclusive_at_the_boundary() {
    let manager = manager_ctx();
    let today = date(2024, 6, 15);
    let schedule = monthly_schedule(manager.organization_id, None, today, &DefaultClock);

    assert!(!schedule.is_overdue(today));
    assert!(schedule.is_due_soon(today));
}

#[rstest]
fn completion_rolls_forward_from_the_previous_due_date() {
    let manager = manager_ctx();
    let mut schedule =
        monthly_schedule(manager.organization_id, None, date(2024, 1, 31), &DefaultClock);

    // Completed late, on 10 February; the cadence still anchors to the
    // original due date, not the completion date.
    schedule
        .complete(&manager, &DefaultClock)
        .expect("manager may complete");
    assert_eq!(schedule.next_due_date(), date(2024, 2, 29));

    schedule
        .complete(&manager, &DefaultClock)
        .expect("manager may complete");
    assert_eq!(schedule.next_due_date(), date(2024, 3, 29));
}

#[rstest]
fn the_assignee_may_complete_but_other_members_may_not() {
    let manager = manager_ctx();
    let assignee = member_in(&manager);
    let bystander = member_in(&manager);
    let mut schedule = monthly_schedule(
        manager.organization_id,
        Some(assignee.actor_id),
        date(2024, 6, 15),
        &DefaultClock,
    );

    let denied = schedule.complete(&bystander, &DefaultClock);
    assert!(matches!(
        denied,
        Err(MaintenanceDomainError::PermissionDenied { actor, .. })
            if actor == bystander.actor_id
    ));

    schedule
        .complete(&assignee, &DefaultClock)
        .expect("assignee may complete");
    assert_eq!(schedule.next_due_date(), date(2024, 7, 15));
}

#[rstest]
fn a_deactivated_schedule_cannot_be_completed() {
    let manager = manager_ctx();
    let mut schedule =
        monthly_schedule(manager.organization_id, None, date(2024, 6, 15), &DefaultClock);
    schedule.deactivate(&DefaultClock);

    let result = schedule.complete(&manager, &DefaultClock);
    assert!(matches!(
        result,
        Err(MaintenanceDomainError::Inactive(id)) if id == schedule.id()
    ));
}

#[rstest]
fn lifecycle_changes_bump_the_version_token() {
    let manager = manager_ctx();
    let mut schedule =
        monthly_schedule(manager.organization_id, None, date(2024, 6, 15), &DefaultClock);
    assert_eq!(schedule.version(), Version::initial());

    schedule
        .complete(&manager, &DefaultClock)
        .expect("manager may complete");
    assert_eq!(schedule.version(), Version::initial().next());
}
