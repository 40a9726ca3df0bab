use folio_core::{Draft, FailureKind};

use super::events::FormEvent;
use crate::domain::{AttemptId, FormState, SubmissionStatus};

pub fn reduce(mut state: FormState, ev: FormEvent) -> FormState {
    match ev {
        FormEvent::Opened => {
            state.visible = true;
            reset_status(&mut state);
        }

        FormEvent::Closed => {
            state.visible = false;
            reset_status(&mut state);
        }

        FormEvent::FieldUpdated { field, value } => state.draft.set(field, value),

        FormEvent::ValidationFailed(err) => {
            state.status = SubmissionStatus::Failed;
            state.last_failure = Some(FailureKind::Validation);
            state.last_error = Some(err.to_string());
        }

        FormEvent::SendStarted { attempt_id } => {
            state.status = SubmissionStatus::Sending;
            state.attempt_id = Some(attempt_id);
            state.in_flight = Some(attempt_id);
            state.last_failure = None;
            state.last_error = None;
        }

        // Settlements for an attempt that was reset or superseded are dropped.
        FormEvent::Delivered { attempt_id, at } => {
            settle(&mut state, attempt_id);
            if state.attempt_id == Some(attempt_id) {
                state.status = SubmissionStatus::Succeeded;
                state.draft = Draft::default();
                state.last_sent_at = Some(at);
            }
        }

        FormEvent::DeliveryFailed {
            attempt_id,
            kind,
            message,
        } => {
            settle(&mut state, attempt_id);
            if state.attempt_id == Some(attempt_id) {
                state.status = SubmissionStatus::Failed;
                state.last_failure = Some(kind);
                state.last_error = Some(message);
            }
        }

        FormEvent::SendAbandoned { attempt_id } => {
            settle(&mut state, attempt_id);
            if state.attempt_id == Some(attempt_id) && state.status == SubmissionStatus::Sending {
                reset_status(&mut state);
            }
        }

        FormEvent::AutoCloseElapsed { attempt_id } => {
            if state.attempt_id == Some(attempt_id) && state.status == SubmissionStatus::Succeeded
            {
                state.visible = false;
                reset_status(&mut state);
            }
        }

        FormEvent::StatusReset => reset_status(&mut state),
    }
    state
}

fn settle(state: &mut FormState, attempt_id: AttemptId) {
    if state.in_flight == Some(attempt_id) {
        state.in_flight = None;
    }
}

fn reset_status(state: &mut FormState) {
    state.status = SubmissionStatus::Idle;
    state.attempt_id = None;
    state.last_failure = None;
    state.last_error = None;
}
