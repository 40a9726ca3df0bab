//! Delivery bridge: lazily initializes the provider client once per process
//! and relays drafts through it.

mod emailjs;
mod settings;

use async_trait::async_trait;
use folio_core::{Draft, FailureKind, TemplateParams};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

pub use emailjs::{EmailJsClient, EmailJsLoader};
pub use settings::DeliverySettings;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("delivery client failed to load: {0}")]
    Load(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl DeliveryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DeliveryError::Load(_) => FailureKind::Load,
            DeliveryError::Transport(_) | DeliveryError::Rejected { .. } => {
                FailureKind::Transmission
            }
        }
    }
}

/// Raw provider answer, before it is interpreted as success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResponse {
    pub status: u16,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub status: u16,
    pub text: String,
}

pub type DeliveryResult = Result<SendReceipt, DeliveryError>;

/// An initialized provider client.
#[async_trait]
pub trait MailClient: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<SendResponse, DeliveryError>;
}

/// Produces an initialized [`MailClient`]. Called at most once per bridge
/// unless a previous load failed.
#[async_trait]
pub trait ClientLoader: Send + Sync {
    async fn load(&self, settings: &DeliverySettings) -> Result<Arc<dyn MailClient>, DeliveryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Uninitialized,
    Loading,
    Ready,
    Sending,
    Sent,
    SendFailed,
}

pub struct DeliveryBridge {
    settings: DeliverySettings,
    loader: Arc<dyn ClientLoader>,
    handle: OnceCell<Arc<dyn MailClient>>,
    /// Serialises loads; holds the error of the most recent failed one.
    load_lock: tokio::sync::Mutex<Option<String>>,
    failed_loads: AtomicU64,
    state: Mutex<BridgeState>,
}

impl DeliveryBridge {
    pub fn new(settings: DeliverySettings, loader: Arc<dyn ClientLoader>) -> Self {
        Self {
            settings,
            loader,
            handle: OnceCell::new(),
            load_lock: tokio::sync::Mutex::new(None),
            failed_loads: AtomicU64::new(0),
            state: Mutex::new(BridgeState::Uninitialized),
        }
    }

    /// Bridge backed by the EmailJS REST API.
    pub fn emailjs(http: reqwest::Client, settings: DeliverySettings) -> Self {
        Self::new(settings, Arc::new(EmailJsLoader::new(http)))
    }

    pub fn settings(&self) -> &DeliverySettings {
        &self.settings
    }

    pub fn state(&self) -> BridgeState {
        *self.state.lock().unwrap()
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.initialized()
    }

    fn set_state(&self, next: BridgeState) {
        let mut guard = self.state.lock().unwrap();
        debug!("delivery bridge: {:?} -> {:?}", *guard, next);
        *guard = next;
    }

    async fn client(&self) -> Result<Arc<dyn MailClient>, DeliveryError> {
        if let Some(client) = self.handle.get() {
            return Ok(client.clone());
        }

        // Callers that queued behind a load share its outcome, failure included.
        let seen = self.failed_loads.load(Ordering::SeqCst);
        let mut last_error = self.load_lock.lock().await;
        if let Some(client) = self.handle.get() {
            return Ok(client.clone());
        }
        if self.failed_loads.load(Ordering::SeqCst) != seen {
            let msg = last_error.clone().unwrap_or_default();
            return Err(DeliveryError::Load(msg));
        }

        self.set_state(BridgeState::Loading);
        match self.loader.load(&self.settings).await {
            Ok(client) => {
                info!("delivery client loaded");
                let _ = self.handle.set(client.clone());
                *last_error = None;
                self.set_state(BridgeState::Ready);
                Ok(client)
            }
            Err(e) => {
                warn!("delivery client failed to load: {e}");
                *last_error = Some(match &e {
                    DeliveryError::Load(reason) => reason.clone(),
                    other => other.to_string(),
                });
                self.failed_loads.fetch_add(1, Ordering::SeqCst);
                self.set_state(BridgeState::Uninitialized);
                Err(e)
            }
        }
    }

    /// Initializes the provider client if it is not loaded yet. Concurrent
    /// callers share one in-flight initialization and its result; a call made
    /// after a failed load has settled tries again.
    pub async fn ensure_loaded(&self) -> Result<(), DeliveryError> {
        self.client().await.map(|_| ())
    }

    pub async fn send(&self, draft: &Draft) -> DeliveryResult {
        let client = self.client().await?;

        self.set_state(BridgeState::Sending);
        let params = draft.template_params(&self.settings.to_email, &self.settings.default_subject);
        let res = client
            .send(&self.settings.service_id, &self.settings.template_id, &params)
            .await;

        match res {
            Ok(resp) if resp.status == folio_config::SUCCESS_STATUS => {
                info!("message from {} delivered", params.from_email);
                self.set_state(BridgeState::Sent);
                Ok(SendReceipt {
                    status: resp.status,
                    text: resp.text,
                })
            }
            Ok(resp) => {
                warn!("delivery rejected with status {}: {}", resp.status, resp.text);
                self.set_state(BridgeState::SendFailed);
                Err(DeliveryError::Rejected {
                    status: resp.status,
                    body: resp.text,
                })
            }
            Err(e) => {
                warn!("delivery failed: {e}");
                self.set_state(BridgeState::SendFailed);
                Err(e)
            }
        }
    }
}
