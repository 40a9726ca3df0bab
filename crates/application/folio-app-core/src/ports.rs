use async_trait::async_trait;
use folio_core::Draft;
use folio_infra::{DeliveryBridge, DeliveryError, DeliveryResult};

pub trait SettingsRepo: Send + Sync + 'static {
    fn load(&self) -> anyhow::Result<folio_infra::DeliverySettings>;
    fn save(&self, settings: &folio_infra::DeliverySettings) -> anyhow::Result<()>;
}

#[async_trait]
pub trait DeliveryPort: Send + Sync + 'static {
    async fn ensure_loaded(&self) -> Result<(), DeliveryError>;
    async fn send(&self, draft: &Draft) -> DeliveryResult;
}

#[async_trait]
impl DeliveryPort for DeliveryBridge {
    async fn ensure_loaded(&self) -> Result<(), DeliveryError> {
        DeliveryBridge::ensure_loaded(self).await
    }

    async fn send(&self, draft: &Draft) -> DeliveryResult {
        DeliveryBridge::send(self, draft).await
    }
}
