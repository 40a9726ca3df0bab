use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    folio_config::EMAILJS_API_BASE.to_string()
}

fn default_subject() -> String {
    folio_config::DEFAULT_SUBJECT.to_string()
}

fn default_timeout_secs() -> u64 {
    folio_config::DEFAULT_TIMEOUT_SECS
}

/// Identifiers and credentials for the delivery provider. None of these are
/// user supplied; they come from the settings file or the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySettings {
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    /// Optional access token for accounts that require it on API calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default)]
    pub to_email: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_subject")]
    pub default_subject: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
            to_email: String::new(),
            api_base: default_api_base(),
            default_subject: default_subject(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DeliverySettings {
    /// Names of the required values that are still blank.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
            ("to_email", &self.to_email),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.missing().is_empty()
    }
}
