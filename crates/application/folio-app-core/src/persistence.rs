use anyhow::{Context, Result};
use directories::ProjectDirs;
use folio_infra::DeliverySettings;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ports::SettingsRepo;

const QUALIFIER: &str = "dev";
const ORG: &str = "folio";
const APP: &str = "contact";

/// Stores delivery settings as JSON, by default in the platform config dir.
pub struct FilePersistence {
    root: Option<PathBuf>,
}

impl Default for FilePersistence {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePersistence {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Persistence rooted at an explicit directory instead of the platform one.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        let config_dir = match &self.root {
            Some(root) => root.clone(),
            None => ProjectDirs::from(QUALIFIER, ORG, APP)
                .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
                .config_dir()
                .to_path_buf(),
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }
        Ok(config_dir)
    }

    pub fn settings_path(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("settings.json"))
    }

    pub fn load_settings(&self) -> Result<DeliverySettings> {
        let path = self.settings_path()?;
        if !path.exists() {
            return Ok(DeliverySettings::default());
        }
        let content = fs::read_to_string(&path).context("Failed to read settings")?;
        let settings: DeliverySettings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &DeliverySettings) -> Result<()> {
        let path = self.settings_path()?;
        let json = serde_json::to_string_pretty(settings)?;
        atomic_write(&path, json.as_bytes()).context("Failed to write settings")?;
        Ok(())
    }
}

impl SettingsRepo for FilePersistence {
    fn load(&self) -> Result<DeliverySettings> {
        self.load_settings()
    }

    fn save(&self, settings: &DeliverySettings) -> Result<()> {
        self.save_settings(settings)
    }
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file {}", tmp_path.display()))?;
    file.write_all(contents)
        .with_context(|| format!("Failed to write temp file {}", tmp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync temp file {}", tmp_path.display()))?;
    drop(file);

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename temp file {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePersistence::at(dir.path());
        let s = store.load_settings().unwrap();
        assert_eq!(s, DeliverySettings::default());
        assert!(!s.is_configured());
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePersistence::at(dir.path().join("nested"));

        let settings = DeliverySettings {
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "pk".into(),
            to_email: "owner@example.com".into(),
            ..DeliverySettings::default()
        };
        store.save_settings(&settings).unwrap();

        assert!(store.settings_path().unwrap().exists());
        assert_eq!(store.load_settings().unwrap(), settings);
    }

    #[test]
    fn partial_file_falls_back_to_defaults_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePersistence::at(dir.path());
        fs::write(
            store.settings_path().unwrap(),
            r#"{ "service_id": "svc", "timeout_secs": 5 }"#,
        )
        .unwrap();

        let s = store.load_settings().unwrap();
        assert_eq!(s.service_id, "svc");
        assert_eq!(s.timeout_secs, 5);
        assert_eq!(s.api_base, folio_config::EMAILJS_API_BASE);
        assert_eq!(s.default_subject, folio_config::DEFAULT_SUBJECT);
    }
}
