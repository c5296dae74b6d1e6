//! Unit tests for recurrence calendar arithmetic.

use super::{assignment_between, date, manager_ctx, member_in};
use crate::assignment::domain::{AssignmentStatus, Recurrence};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case(Recurrence::Daily, date(2024, 3, 1), date(2024, 3, 2))]
#[case(Recurrence::Weekly, date(2024, 3, 1), date(2024, 3, 8))]
#[case(Recurrence::Monthly, date(2024, 3, 1), date(2024, 4, 1))]
// Month-end dates clamp instead of spilling into the next month.
#[case(Recurrence::Monthly, date(2024, 1, 31), date(2024, 2, 29))]
#[case(Recurrence::Monthly, date(2023, 1, 31), date(2023, 2, 28))]
#[case(Recurrence::Monthly, date(2024, 10, 31), date(2024, 11, 30))]
fn advance_uses_calendar_arithmetic(
    #[case] recurrence: Recurrence,
    #[case] from: chrono::NaiveDate,
    #[case] expected: chrono::NaiveDate,
) {
    assert_eq!(recurrence.advance(from), Some(expected));
}

#[rstest]
fn none_recurrence_never_advances() {
    assert_eq!(Recurrence::None.advance(date(2024, 3, 1)), None);
}

#[rstest]
fn completed_weekly_assignment_produces_one_pending_successor() {
    let clock = DefaultClock;
    let manager = manager_ctx();
    let member = member_in(&manager);
    let mut assignment = assignment_between(
        &manager,
        member.actor_id,
        date(2024, 3, 1),
        Recurrence::Weekly,
        &clock,
    );
    assignment.start(&member, &clock).expect("assignee starts");
    assignment
        .complete(&member, &clock)
        .expect("assignee completes");

    let successor = assignment
        .next_occurrence(&clock)
        .expect("calendar arithmetic in range")
        .expect("weekly recurrence produces a successor");

    assert_eq!(successor.due_date(), date(2024, 3, 8));
    assert_eq!(successor.status(), AssignmentStatus::Pending);
    assert_eq!(successor.assignee(), assignment.assignee());
    assert_eq!(successor.recurrence(), Recurrence::Weekly);
    assert_ne!(successor.id(), assignment.id());
}

#[rstest]
fn non_recurring_assignment_produces_no_successor() {
    let clock = DefaultClock;
    let manager = manager_ctx();
    let member = member_in(&manager);
    let assignment = assignment_between(
        &manager,
        member.actor_id,
        date(2024, 3, 1),
        Recurrence::None,
        &clock,
    );

    let successor = assignment
        .next_occurrence(&clock)
        .expect("calendar arithmetic in range");
    assert!(successor.is_none());
}

#[rstest]
fn late_completion_stays_anchored_to_the_prior_due_date() {
    // Due 2024-03-01, completed late on 2024-03-05: the next daily
    // occurrence is still 2024-03-02, not 2024-03-06.
    let clock = DefaultClock;
    let manager = manager_ctx();
    let member = member_in(&manager);
    let mut assignment = assignment_between(
        &manager,
        member.actor_id,
        date(2024, 3, 1),
        Recurrence::Daily,
        &clock,
    );
    assignment.start(&member, &clock).expect("assignee starts");
    assignment
        .complete(&member, &clock)
        .expect("assignee completes");

    let successor = assignment
        .next_occurrence(&clock)
        .expect("calendar arithmetic in range")
        .expect("daily recurrence produces a successor");
    assert_eq!(successor.due_date(), date(2024, 3, 2));
}
