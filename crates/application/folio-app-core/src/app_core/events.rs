use chrono::{DateTime, Utc};
use folio_core::{DraftField, FailureKind, ValidationError};

use crate::domain::AttemptId;

#[derive(Debug, Clone)]
pub enum FormEvent {
    // Visibility
    Opened,
    Closed,

    // Editing
    FieldUpdated { field: DraftField, value: String },

    // Submission
    ValidationFailed(ValidationError),
    SendStarted {
        attempt_id: AttemptId,
    },
    Delivered {
        attempt_id: AttemptId,
        at: DateTime<Utc>,
    },
    DeliveryFailed {
        attempt_id: AttemptId,
        kind: FailureKind,
        message: String,
    },
    /// The submitting task was dropped before the send settled.
    SendAbandoned {
        attempt_id: AttemptId,
    },
    AutoCloseElapsed {
        attempt_id: AttemptId,
    },

    StatusReset,
}
