use anyhow::Result;
use camino::Utf8PathBuf;
use folio_app_core::persistence::FilePersistence;
use folio_app_core::ports::SettingsRepo;
use folio_infra::DeliverySettings;

use crate::DeliveryOverrides;

pub fn repo(config_dir: Option<Utf8PathBuf>) -> FilePersistence {
    match config_dir {
        Some(dir) => FilePersistence::at(dir.into_std_path_buf()),
        None => FilePersistence::new(),
    }
}

/// Stored settings with command-line and environment overrides on top.
pub fn resolve(repo: &impl SettingsRepo, overrides: DeliveryOverrides) -> Result<DeliverySettings> {
    Ok(overrides.apply(repo.load()?))
}

/// Copy of the settings safe to print.
pub fn redacted(settings: &DeliverySettings) -> DeliverySettings {
    let mut s = settings.clone();
    if s.private_key.is_some() {
        s.private_key = Some("********".into());
    }
    s
}
