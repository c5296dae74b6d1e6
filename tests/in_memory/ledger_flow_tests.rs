//! Ledger recording, verification, and reporting over the in-memory
//! adapters.

use super::helpers::Workspace;
use chrono::{Duration, Utc};
use foreman::assignment::domain::AssignmentId;
use foreman::checklist::domain::ChecklistId;
use foreman::ledger::domain::{
    CompletionTarget, LedgerDomainError, LedgerFilter, PhotoRef, QualityScore, TargetKind,
    TimeRange,
};
use foreman::ledger::services::{LedgerError, NewCompletion};
use rstest::rstest;

fn last_hour() -> TimeRange {
    TimeRange::new(Utc::now() - Duration::hours(1), Utc::now()).expect("valid window")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn records_carry_evidence_and_scores() {
    let ws = Workspace::new();
    let photo = PhotoRef::new("evidence/walkin-0700.jpg").expect("valid photo");
    let score = QualityScore::new(4).expect("valid score");

    let record = ws
        .ledger
        .record(
            &ws.member,
            NewCompletion::new(CompletionTarget::Assignment(AssignmentId::new()), 25)
                .with_notes("Shelves restocked")
                .with_photo(photo.clone())
                .with_quality_score(score),
        )
        .await
        .expect("record should succeed");

    assert_eq!(record.notes(), Some("Shelves restocked"));
    assert_eq!(record.photo(), Some(&photo));
    assert_eq!(record.quality_score(), Some(score));
    assert!(record.verification().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn verification_is_manager_only_and_write_once() {
    let ws = Workspace::new();
    let record = ws
        .ledger
        .record(
            &ws.member,
            NewCompletion::new(CompletionTarget::Checklist(ChecklistId::new()), 15),
        )
        .await
        .expect("record should succeed");

    let denied = ws.ledger.verify(&ws.member, record.id()).await;
    assert!(matches!(denied, Err(LedgerError::PermissionDenied(_))));

    ws.ledger
        .verify(&ws.manager, record.id())
        .await
        .expect("first verification should succeed");
    let second = ws.ledger.verify(&ws.manager, record.id()).await;
    assert!(matches!(
        second,
        Err(LedgerError::Domain(LedgerDomainError::AlreadyVerified(id))) if id == record.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn queries_narrow_by_kind_actor_and_window() {
    let ws = Workspace::new();
    ws.ledger
        .record(
            &ws.member,
            NewCompletion::new(CompletionTarget::Assignment(AssignmentId::new()), 10),
        )
        .await
        .expect("record should succeed");
    ws.ledger
        .record(
            &ws.manager,
            NewCompletion::new(CompletionTarget::Checklist(ChecklistId::new()), 30),
        )
        .await
        .expect("record should succeed");

    let by_kind = ws
        .ledger
        .query(
            &ws.manager,
            &LedgerFilter::for_range(last_hour()).with_target_kind(TargetKind::Checklist),
        )
        .await
        .expect("query should succeed");
    assert_eq!(by_kind.len(), 1);
    assert_eq!(by_kind[0].duration_minutes(), 30);

    let by_actor = ws
        .ledger
        .query(
            &ws.manager,
            &LedgerFilter::for_range(last_hour()).with_completed_by(ws.member.actor_id),
        )
        .await
        .expect("query should succeed");
    assert_eq!(by_actor.len(), 1);
    assert_eq!(by_actor[0].completed_by(), ws.member.actor_id);

    // Re-issuing the query restarts the sequence with the same result.
    let everything = ws
        .ledger
        .query(&ws.manager, &LedgerFilter::for_range(last_hour()))
        .await
        .expect("query should succeed");
    assert_eq!(everything.len(), 2);
    assert!(everything[0].completed_at() >= everything[1].completed_at());
}
