pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod form;
pub mod persistence;
pub mod ports;

use anyhow::Context;
use folio_infra::{DeliveryBridge, DeliverySettings};
use std::sync::Arc;

pub use app_core::*;
pub use domain::{AttemptId, FormOptions, FormState, SubmissionStatus};
pub use form::ContactForm;
pub use ports::*;

/// Builds a shared EmailJS-backed bridge. Hand the same `Arc` to every form
/// in the process so the provider client is initialized only once.
pub fn default_bridge(settings: DeliverySettings) -> anyhow::Result<Arc<DeliveryBridge>> {
    let client =
        folio_infra::net::default_http_client().context("Failed to build HTTP client")?;
    Ok(Arc::new(DeliveryBridge::emailjs(client, settings)))
}
