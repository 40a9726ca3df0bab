//! Form state holder: owns the draft and submission status for one contact
//! form and drives validation and delivery.

use chrono::Utc;
use folio_core::{Draft, DraftField};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::app_core::{FormEvent, FormStore, SubmitGate};
use crate::domain::{AttemptId, FormOptions, FormState, SubmissionStatus};
use crate::ports::DeliveryPort;

/// Releases the in-flight marker if a submit future is dropped mid-send.
struct PendingAttempt<'a> {
    store: &'a FormStore,
    attempt_id: AttemptId,
    settled: bool,
}

impl Drop for PendingAttempt<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("attempt {} abandoned", self.attempt_id);
            self.store.apply(FormEvent::SendAbandoned {
                attempt_id: self.attempt_id,
            });
        }
    }
}

pub struct ContactForm<D> {
    store: FormStore,
    delivery: Arc<D>,
    options: FormOptions,
}

impl<D> Clone for ContactForm<D> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            delivery: self.delivery.clone(),
            options: self.options.clone(),
        }
    }
}

impl<D: DeliveryPort> ContactForm<D> {
    pub fn new(delivery: Arc<D>, options: FormOptions) -> Self {
        Self::with_store(FormStore::default(), delivery, options)
    }

    pub fn with_store(store: FormStore, delivery: Arc<D>, options: FormOptions) -> Self {
        Self {
            store,
            delivery,
            options,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn state(&self) -> FormState {
        self.store.state()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.store.state().status
    }

    pub fn draft(&self) -> Draft {
        self.store.state().draft
    }

    pub fn update_field(&self, field: DraftField, value: impl Into<String>) {
        self.store.apply(FormEvent::FieldUpdated {
            field,
            value: value.into(),
        });
    }

    pub fn open(&self) {
        self.store.apply(FormEvent::Opened);
    }

    pub fn close(&self) {
        self.store.apply(FormEvent::Closed);
    }

    pub fn toggle(&self) {
        if self.store.state().visible {
            self.close();
        } else {
            self.open();
        }
    }

    /// Returns the status to `Idle`. A send still in flight completes, but
    /// its result is discarded. The draft is kept.
    pub fn reset(&self) {
        self.store.apply(FormEvent::StatusReset);
    }

    /// Validates and sends the current draft. Returns the status once the
    /// attempt settles. Calling this while a send is in flight does nothing.
    pub async fn submit(&self) -> SubmissionStatus {
        let (attempt_id, draft) = match self.store.begin_submit() {
            SubmitGate::Busy => {
                debug!("submit ignored: a send is already in flight");
                return self.status();
            }
            SubmitGate::Invalid(err) => {
                info!("submission rejected: {err}");
                return self.status();
            }
            SubmitGate::Started { attempt_id, draft } => (attempt_id, draft),
        };

        debug!("attempt {attempt_id} started");
        let mut pending = PendingAttempt {
            store: &self.store,
            attempt_id,
            settled: false,
        };
        let outcome = match self.delivery.ensure_loaded().await {
            Ok(()) => self.delivery.send(&draft).await,
            Err(e) => Err(e),
        };

        pending.settled = true;
        match outcome {
            Ok(_) => {
                info!("attempt {attempt_id} delivered");
                self.store.apply(FormEvent::Delivered {
                    attempt_id,
                    at: Utc::now(),
                });
                if let Some(delay) = self.options.auto_close_after {
                    self.schedule_auto_close(attempt_id, delay);
                }
            }
            Err(e) => {
                warn!("attempt {attempt_id} failed ({}): {e}", e.kind());
                self.store.apply(FormEvent::DeliveryFailed {
                    attempt_id,
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }

        self.status()
    }

    /// Runs [`submit`](Self::submit) on the shared runtime for callers that
    /// are not inside an async context.
    pub fn submit_blocking(&self) -> anyhow::Result<SubmissionStatus> {
        crate::async_runtime::block_on(self.submit())
    }

    fn schedule_auto_close(&self, attempt_id: AttemptId, delay: Duration) {
        let store = self.store.downgrade();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if !store.apply(FormEvent::AutoCloseElapsed { attempt_id }) {
                debug!("form dropped before auto-close of attempt {attempt_id}");
            }
        });
    }
}
