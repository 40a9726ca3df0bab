use chrono::Utc;
use folio_app_core::app_core::{FormEvent, FormStore, SubmitGate};
use folio_app_core::domain::{AttemptId, FormState};
use folio_app_core::SubmissionStatus;
use folio_core::{DraftField, FailureKind};

fn started_store() -> (FormStore, AttemptId) {
    let store = FormStore::new(FormState::default());
    for (field, value) in [
        (DraftField::Name, "Jane"),
        (DraftField::Email, "jane@example.com"),
        (DraftField::Message, "hi"),
    ] {
        store.apply(FormEvent::FieldUpdated {
            field,
            value: value.into(),
        });
    }
    match store.begin_submit() {
        SubmitGate::Started { attempt_id, .. } => (store, attempt_id),
        other => panic!("expected a started attempt, got {other:?}"),
    }
}

#[test]
fn settlements_for_other_attempts_are_ignored() {
    let (store, _current) = started_store();
    let stale: AttemptId = uuid::Uuid::new_v4();

    let before = store.state();
    store.apply(FormEvent::Delivered {
        attempt_id: stale,
        at: Utc::now(),
    });
    store.apply(FormEvent::DeliveryFailed {
        attempt_id: stale,
        kind: FailureKind::Transmission,
        message: "stale".into(),
    });

    let after = store.state();
    assert_eq!(after.status, SubmissionStatus::Sending);
    assert_eq!(after.attempt_id, before.attempt_id);
    assert_eq!(after.draft, before.draft);
    assert_eq!(after.last_error, None);
}

#[test]
fn second_begin_submit_is_busy_while_sending() {
    let (store, _current) = started_store();
    assert!(matches!(store.begin_submit(), SubmitGate::Busy));
}

#[test]
fn matching_settlement_is_applied() {
    let (store, current) = started_store();
    store.apply(FormEvent::DeliveryFailed {
        attempt_id: current,
        kind: FailureKind::Load,
        message: "boom".into(),
    });

    let state = store.state();
    assert_eq!(state.status, SubmissionStatus::Failed);
    assert_eq!(state.last_failure, Some(FailureKind::Load));
    assert_eq!(state.draft.name, "Jane");

    assert!(matches!(store.begin_submit(), SubmitGate::Started { .. }));
}

#[test]
fn reset_keeps_the_send_in_flight_until_it_settles() {
    let (store, current) = started_store();
    store.apply(FormEvent::StatusReset);

    let state = store.state();
    assert_eq!(state.status, SubmissionStatus::Idle);
    assert_eq!(state.in_flight, Some(current));
    assert!(matches!(store.begin_submit(), SubmitGate::Busy));

    store.apply(FormEvent::Delivered {
        attempt_id: current,
        at: Utc::now(),
    });
    let state = store.state();
    assert_eq!(state.status, SubmissionStatus::Idle);
    assert_eq!(state.in_flight, None);
    assert!(state.last_sent_at.is_none());
    assert!(matches!(store.begin_submit(), SubmitGate::Started { .. }));
}
