use std::sync::{Arc, Mutex, Weak};

use folio_core::{Draft, ValidationError};

use super::{events::FormEvent, reducer::reduce};
use crate::domain::{AttemptId, FormState};

/// Outcome of trying to start a submission.
#[derive(Debug, Clone)]
pub enum SubmitGate {
    /// A send is already in flight; nothing was started.
    Busy,
    Invalid(ValidationError),
    Started { attempt_id: AttemptId, draft: Draft },
}

#[derive(Clone, Default)]
pub struct FormStore {
    inner: Arc<Mutex<FormState>>,
}

impl FormStore {
    pub fn new(state: FormState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> FormState {
        self.inner.lock().unwrap().clone()
    }

    pub fn apply(&self, ev: FormEvent) {
        let mut guard = self.inner.lock().unwrap();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    /// Checks the reentrancy guard and validates the draft, then moves to
    /// `Sending`, all under one lock so two callers cannot both start.
    pub fn begin_submit(&self) -> SubmitGate {
        let mut guard = self.inner.lock().unwrap();
        if guard.in_flight.is_some() {
            return SubmitGate::Busy;
        }

        if let Err(err) = folio_core::check(&guard.draft) {
            *guard = reduce(guard.clone(), FormEvent::ValidationFailed(err));
            return SubmitGate::Invalid(err);
        }

        let attempt_id: AttemptId = uuid::Uuid::new_v4();
        let draft = guard.draft.clone();
        *guard = reduce(guard.clone(), FormEvent::SendStarted { attempt_id });
        SubmitGate::Started { attempt_id, draft }
    }

    pub(crate) fn downgrade(&self) -> WeakFormStore {
        WeakFormStore(Arc::downgrade(&self.inner))
    }
}

/// Handle that does not keep a torn-down form alive.
pub(crate) struct WeakFormStore(Weak<Mutex<FormState>>);

impl WeakFormStore {
    /// Applies the event if the form still exists; returns whether it did.
    pub(crate) fn apply(&self, ev: FormEvent) -> bool {
        match self.0.upgrade() {
            Some(inner) => {
                FormStore { inner }.apply(ev);
                true
            }
            None => false,
        }
    }
}
