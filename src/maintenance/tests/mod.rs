//! Unit tests for the maintenance module.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

mod domain_tests;

use crate::assignment::domain::Priority;
use crate::identity::{ActorContext, ActorId, OrgId, Role};
use crate::maintenance::domain::{
    FrequencyInterval, FrequencyType, MaintenanceSchedule, MaintenanceType, ScheduleDetails,
};
use chrono::NaiveDate;
use mockable::Clock;

/// Builds a monthly preventive schedule assigned to the given actor.
fn monthly_schedule(
    organization_id: OrgId,
    assigned_to: Option<ActorId>,
    next_due_date: NaiveDate,
    clock: &impl Clock,
) -> MaintenanceSchedule {
    let details = ScheduleDetails {
        organization_id,
        equipment_name: "Walk-in freezer".to_owned(),
        maintenance_type: MaintenanceType::Preventive,
        frequency_type: FrequencyType::Monthly,
        frequency_interval: FrequencyInterval::default(),
        next_due_date,
        assigned_to,
        priority: Priority::High,
        estimated_duration_minutes: 45,
        instructions: Some("Check door seals and defrost cycle".to_owned()),
    };
    MaintenanceSchedule::new(details, clock).expect("valid schedule")
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
