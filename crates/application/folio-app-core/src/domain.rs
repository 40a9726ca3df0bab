use chrono::{DateTime, Utc};
use folio_core::{Draft, FailureKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub type AttemptId = uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    /// Close the form and return to `Idle` this long after a successful send.
    pub auto_close_after: Option<Duration>,
}

impl FormOptions {
    pub fn auto_close() -> Self {
        Self {
            auto_close_after: Some(folio_config::AUTO_CLOSE_DELAY),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub visible: bool,
    pub draft: Draft,
    pub status: SubmissionStatus,

    /// Attempt whose result the form is waiting for (or just received).
    pub attempt_id: Option<AttemptId>,

    /// Attempt whose transmission has not settled yet. Survives reset and
    /// close, so a new submit cannot start a second concurrent send.
    pub in_flight: Option<AttemptId>,

    /// Why the last attempt failed. The status itself stays a single `Failed`.
    pub last_failure: Option<FailureKind>,
    pub last_error: Option<String>,
    pub last_sent_at: Option<DateTime<Utc>>,
}
