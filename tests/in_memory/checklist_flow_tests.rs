//! End-to-end checklist workflow over the in-memory adapters.

use super::helpers::Workspace;
use foreman::checklist::domain::{
    ChecklistDomainError, ChecklistItem, ChecklistType, ItemUpdate, Requirement,
};
use foreman::checklist::services::{ChecklistError, DefineChecklistRequest};
use foreman::events::WorkflowEvent;
use foreman::ledger::domain::PhotoRef;

use rstest::rstest;

fn closing_items() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("Count the till", 1)
            .expect("valid item")
            .required()
            .with_note_required(),
        ChecklistItem::new("Photograph the safe", 2)
            .expect("valid item")
            .required()
            .with_photo_required(),
        ChecklistItem::new("Dim the lights", 3).expect("valid item"),
    ]
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_gated_run_finalizes_into_one_verified_ledger_row() {
    let ws = Workspace::new();
    let definition = ws
        .checklists
        .define(
            &ws.manager,
            DefineChecklistRequest::new("Evening close", ChecklistType::Closing, closing_items()),
        )
        .await
        .expect("define should succeed");

    let mut run = ws
        .checklists
        .start_run(&ws.member, definition.id())
        .await
        .expect("run should start");
    let till = definition.items()[0].id();
    let safe = definition.items()[1].id();

    // Item-level gating fires before finalize-time gating.
    let premature = run.set_item_state(till, ItemUpdate::new().completed());
    assert!(matches!(
        premature,
        Err(ChecklistDomainError::PreconditionNotMet {
            requirement: Requirement::Note,
            ..
        })
    ));

    run.set_item_state(till, ItemUpdate::new().completed().with_notes("Till balanced"))
        .expect("notes satisfy the gate");
    let incomplete = ws.checklists.finalize(&ws.member, &mut run).await;
    assert!(matches!(
        incomplete,
        Err(ChecklistError::Domain(ChecklistDomainError::Incomplete { unmet }))
            if unmet == vec![safe]
    ));

    let photo = PhotoRef::new("evidence/safe-2200.jpg").expect("valid photo");
    run.set_item_state(safe, ItemUpdate::new().completed().with_photo(photo))
        .expect("photo satisfies the gate");
    let record_id = ws
        .checklists
        .finalize(&ws.member, &mut run)
        .await
        .expect("finalize should succeed");

    // A manager verifies the resulting ledger row exactly once.
    let verified = ws
        .ledger
        .verify(&ws.manager, record_id)
        .await
        .expect("verification should succeed");
    assert_eq!(
        verified
            .verification()
            .map(|verification| verification.verified_by),
        Some(ws.manager.actor_id)
    );

    assert!(ws.events.events().contains(&WorkflowEvent::ChecklistFinalized {
        checklist_id: definition.id(),
        run_id: run.run_id(),
        actor_id: ws.member.actor_id,
    }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_runs_of_one_checklist_do_not_interfere() {
    let ws = Workspace::new();
    let definition = ws
        .checklists
        .define(
            &ws.manager,
            DefineChecklistRequest::new("Evening close", ChecklistType::Closing, closing_items()),
        )
        .await
        .expect("define should succeed");

    let mut first = ws
        .checklists
        .start_run(&ws.member, definition.id())
        .await
        .expect("run should start");
    let second = ws
        .checklists
        .start_run(&ws.manager, definition.id())
        .await
        .expect("run should start");
    let till = definition.items()[0].id();

    first
        .set_item_state(till, ItemUpdate::new().completed().with_notes("Balanced"))
        .expect("notes satisfy the gate");

    assert_ne!(first.run_id(), second.run_id());
    assert!(
        !second
            .progress(till)
            .expect("slot exists")
            .is_completed()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn retried_finalize_never_duplicates_the_ledger_row() {
    let ws = Workspace::new();
    let items = vec![ChecklistItem::new("Dim the lights", 1).expect("valid item")];
    let definition = ws
        .checklists
        .define(
            &ws.manager,
            DefineChecklistRequest::new("Quick close", ChecklistType::Closing, items),
        )
        .await
        .expect("define should succeed");

    let mut run = ws
        .checklists
        .start_run(&ws.member, definition.id())
        .await
        .expect("run should start");

    let first = ws
        .checklists
        .finalize(&ws.member, &mut run)
        .await
        .expect("finalize should succeed");
    let retried = ws
        .checklists
        .finalize(&ws.member, &mut run)
        .await
        .expect("retried finalize should succeed");

    assert_eq!(first, retried);
    assert_eq!(ws.ledger_store.len(), 1);
}
