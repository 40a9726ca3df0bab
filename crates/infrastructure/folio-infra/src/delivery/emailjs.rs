use async_trait::async_trait;
use folio_core::TemplateParams;
use reqwest::{Client, Url};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::{ClientLoader, DeliveryError, DeliverySettings, MailClient, SendResponse};

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Initialized EmailJS REST client bound to one public key.
pub struct EmailJsClient {
    http: Client,
    endpoint: Url,
    public_key: String,
    private_key: Option<String>,
    timeout: Duration,
}

#[async_trait]
impl MailClient for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<SendResponse, DeliveryError> {
        let body = SendRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
            access_token: self.private_key.as_deref(),
        };

        debug!("POST {} (service={}, template={})", self.endpoint, service_id, template_id);
        let resp = self
            .http
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        Ok(SendResponse { status, text })
    }
}

/// Builds an [`EmailJsClient`] from settings. Acts as the resource provider
/// for the production bridge.
pub struct EmailJsLoader {
    http: Client,
}

impl EmailJsLoader {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

/// Resolve the send endpoint against a configured API base. A base given
/// without a trailing slash is still treated as a directory.
pub(crate) fn send_endpoint(api_base: &str) -> Result<Url, DeliveryError> {
    let mut base = Url::parse(api_base.trim())
        .map_err(|e| DeliveryError::Load(format!("invalid api base {api_base}: {e}")))?;
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    base.join(folio_config::EMAILJS_SEND_PATH)
        .map_err(|e| DeliveryError::Load(format!("invalid api base {api_base}: {e}")))
}

#[async_trait]
impl ClientLoader for EmailJsLoader {
    async fn load(&self, settings: &DeliverySettings) -> Result<Arc<dyn MailClient>, DeliveryError> {
        let missing = settings.missing();
        if !missing.is_empty() {
            return Err(DeliveryError::Load(format!(
                "delivery is not configured (missing {})",
                missing.join(", ")
            )));
        }

        let endpoint = send_endpoint(&settings.api_base)?;
        let timeout = Duration::from_secs(folio_config::clamp_timeout_secs(settings.timeout_secs));

        Ok(Arc::new(EmailJsClient {
            http: self.http.clone(),
            endpoint,
            public_key: settings.public_key.trim().to_string(),
            private_key: settings
                .private_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
            timeout,
        }))
    }
}
