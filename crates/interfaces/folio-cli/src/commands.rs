use anyhow::Result;
use folio_app_core::{ContactForm, FormOptions, SubmissionStatus};
use folio_core::{Draft, DraftField};
use folio_infra::DeliverySettings;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::settings;
use crate::DeliveryOverrides;

pub const SUCCESS_BANNER: &str = "Message sent successfully!";
pub const FAILURE_BANNER: &str = "Please fill all required fields with valid information.";

pub async fn cmd_send(draft: Draft, settings: DeliverySettings) -> Result<SubmissionStatus> {
    println!(":: Sending message...");
    println!("   From: {} <{}>", draft.name, draft.email);
    if !draft.subject.is_empty() {
        println!("   Subject: {}", draft.subject);
    }

    let bridge = folio_app_core::default_bridge(settings)?;
    let form = ContactForm::new(bridge, FormOptions::default());
    form.open();
    for field in DraftField::ALL {
        form.update_field(field, draft.get(field));
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Sending...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let status = form.submit().await;
    pb.finish_and_clear();

    match status {
        SubmissionStatus::Succeeded => println!("\n:: {SUCCESS_BANNER}"),
        _ => {
            let state = form.state();
            if let (Some(kind), Some(err)) = (state.last_failure, state.last_error) {
                tracing::debug!("send failed ({kind}): {err}");
            }
            println!("\n:: {FAILURE_BANNER}");
        }
    }

    Ok(status)
}

pub fn cmd_validate(draft: &Draft) -> bool {
    match folio_core::check(draft) {
        Ok(()) => {
            println!(":: Draft is valid.");
            true
        }
        Err(e) => {
            println!(":: Draft is invalid: {e}");
            false
        }
    }
}

pub fn cmd_config_show(repo: &impl folio_app_core::ports::SettingsRepo) -> Result<()> {
    let s = repo.load()?;
    println!("{}", serde_json::to_string_pretty(&settings::redacted(&s))?);

    let missing = s.missing();
    if !missing.is_empty() {
        println!("\n:: Not configured yet, missing: {}", missing.join(", "));
    }
    Ok(())
}

pub fn cmd_config_set(
    repo: &impl folio_app_core::ports::SettingsRepo,
    overrides: DeliveryOverrides,
) -> Result<DeliverySettings> {
    if overrides.is_empty() {
        anyhow::bail!("Nothing to set; pass at least one option");
    }
    let updated = settings::resolve(repo, overrides)?;
    repo.save(&updated)?;
    println!(":: Settings saved.");
    Ok(updated)
}
