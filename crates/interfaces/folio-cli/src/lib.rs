pub mod commands;
pub mod settings;

use clap::Args;
use folio_core::Draft;
use folio_infra::DeliverySettings;

/// Fields of the message being composed. Missing values are left blank so
/// the validator can report them.
#[derive(Args, Clone, Debug, Default)]
pub struct DraftArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "", help = "Optional; a default subject is used when empty")]
    pub subject: String,
    #[arg(long, default_value = "")]
    pub message: String,
}

impl From<DraftArgs> for Draft {
    fn from(a: DraftArgs) -> Self {
        Draft::new(a.name, a.email, a.subject, a.message)
    }
}

/// Delivery settings given on the command line or through `FOLIO_*`
/// environment variables. Each one overrides the stored value.
#[derive(Args, Clone, Debug, Default)]
pub struct DeliveryOverrides {
    #[arg(long, env = "FOLIO_SERVICE_ID")]
    pub service_id: Option<String>,
    #[arg(long, env = "FOLIO_TEMPLATE_ID")]
    pub template_id: Option<String>,
    #[arg(long, env = "FOLIO_PUBLIC_KEY")]
    pub public_key: Option<String>,
    #[arg(long, env = "FOLIO_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
    #[arg(long, env = "FOLIO_TO_EMAIL")]
    pub to_email: Option<String>,
    #[arg(long, env = "FOLIO_API_BASE")]
    pub api_base: Option<String>,
    #[arg(long)]
    pub default_subject: Option<String>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Values for `config set`. Only explicit flags count here: environment
/// variables apply to a single run and are never written to the settings file.
#[derive(Args, Clone, Debug, Default)]
pub struct StoredSettingsArgs {
    #[arg(long)]
    pub service_id: Option<String>,
    #[arg(long)]
    pub template_id: Option<String>,
    #[arg(long)]
    pub public_key: Option<String>,
    #[arg(long)]
    pub private_key: Option<String>,
    #[arg(long)]
    pub to_email: Option<String>,
    #[arg(long)]
    pub api_base: Option<String>,
    #[arg(long)]
    pub default_subject: Option<String>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl From<StoredSettingsArgs> for DeliveryOverrides {
    fn from(a: StoredSettingsArgs) -> Self {
        Self {
            service_id: a.service_id,
            template_id: a.template_id,
            public_key: a.public_key,
            private_key: a.private_key,
            to_email: a.to_email,
            api_base: a.api_base,
            default_subject: a.default_subject,
            timeout_secs: a.timeout_secs,
        }
    }
}

impl DeliveryOverrides {
    pub fn apply(self, mut s: DeliverySettings) -> DeliverySettings {
        if let Some(v) = self.service_id {
            s.service_id = v;
        }
        if let Some(v) = self.template_id {
            s.template_id = v;
        }
        if let Some(v) = self.public_key {
            s.public_key = v;
        }
        if let Some(v) = self.private_key {
            s.private_key = Some(v);
        }
        if let Some(v) = self.to_email {
            s.to_email = v;
        }
        if let Some(v) = self.api_base {
            s.api_base = v;
        }
        if let Some(v) = self.default_subject {
            s.default_subject = v;
        }
        if let Some(v) = self.timeout_secs {
            s.timeout_secs = v;
        }
        s
    }

    pub fn is_empty(&self) -> bool {
        self.service_id.is_none()
            && self.template_id.is_none()
            && self.public_key.is_none()
            && self.private_key.is_none()
            && self.to_email.is_none()
            && self.api_base.is_none()
            && self.default_subject.is_none()
            && self.timeout_secs.is_none()
    }
}
