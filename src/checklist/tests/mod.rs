//! Unit tests for the checklist module.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]


use crate::checklist::domain::{ChecklistDefinition, ChecklistItem, ChecklistType};
use crate::identity::{ActorContext, ActorId, OrgId, Role};
use mockable::Clock;

/// Five-item opening checklist: two required items (the second needing a
/// photo), one note-gated optional item, and two plain optional items.
fn opening_checklist(organization_id: OrgId, clock: &impl Clock) -> ChecklistDefinition {
    let items = vec![
        ChecklistItem::new("Unlock front doors", 1)
            .expect("valid item")
            .required(),
        ChecklistItem::new("Check fridge temperatures", 2)
            .expect("valid item")
            .required()
            .with_photo_required(),
        ChecklistItem::new("Note overnight deliveries", 3)
            .expect("valid item")
            .with_note_required(),
        ChecklistItem::new("Turn on signage", 4).expect("valid item"),
        ChecklistItem::new("Sweep entrance", 5).expect("valid item"),
    ];
    ChecklistDefinition::new(
        organization_id,
        "Morning opening",
        ChecklistType::Opening,
        items,
        clock,
    )
    .expect("valid checklist")
}

/// Manager context fixture helper shared across test modules.
fn manager_ctx() -> ActorContext {
    ActorContext::new(ActorId::new(), Role::Manager, OrgId::new())
}

/// Member context in the same organization as the given context.
fn member_in(org_ctx: &ActorContext) -> ActorContext {
    ActorContext::new(ActorId::new(), Role::Member, org_ctx.organization_id)
}
