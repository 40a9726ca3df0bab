#![allow(dead_code)]

use async_trait::async_trait;
use folio_app_core::ports::DeliveryPort;
use folio_core::{Draft, DraftField};
use folio_infra::{DeliveryError, DeliveryResult, SendReceipt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Accept,
    Reject(u16),
    /// The request never got a response.
    Unreachable,
    FailLoad,
}

pub struct StubDelivery {
    pub behaviour: Behaviour,
    pub loads: AtomicUsize,
    pub sends: AtomicUsize,
    pub sent: Mutex<Vec<Draft>>,
    /// When set, `send` parks until the test releases it.
    pub gate: Option<Arc<Notify>>,
}

impl StubDelivery {
    pub fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            loads: AtomicUsize::new(0),
            sends: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated(behaviour: Behaviour) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let mut stub = Self::new(behaviour);
        stub.gate = Some(gate.clone());
        (stub, gate)
    }

    pub fn sends(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeliveryPort for StubDelivery {
    async fn ensure_loaded(&self) -> Result<(), DeliveryError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match self.behaviour {
            Behaviour::FailLoad => Err(DeliveryError::Load("script unavailable".into())),
            _ => Ok(()),
        }
    }

    async fn send(&self, draft: &Draft) -> DeliveryResult {
        self.sends.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(draft.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.behaviour {
            Behaviour::Accept => Ok(SendReceipt {
                status: 200,
                text: "OK".into(),
            }),
            Behaviour::Reject(status) => Err(DeliveryError::Rejected {
                status,
                body: "rejected".into(),
            }),
            Behaviour::Unreachable => Err(DeliveryError::Transport(transport_error())),
            Behaviour::FailLoad => unreachable!("send after failed load"),
        }
    }
}

fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err()
}

pub fn fill_valid<D: DeliveryPort>(form: &folio_app_core::ContactForm<D>) {
    form.update_field(DraftField::Name, "Jane");
    form.update_field(DraftField::Email, "jane@example.com");
    form.update_field(DraftField::Message, "hi");
}
