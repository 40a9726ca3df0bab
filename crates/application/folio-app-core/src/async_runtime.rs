use anyhow::{bail, Context, Result};
use std::future::Future;
use std::sync::OnceLock;

static SUBMIT_RUNTIME: OnceLock<std::result::Result<tokio::runtime::Runtime, String>> =
    OnceLock::new();

fn submit_runtime() -> Result<&'static tokio::runtime::Runtime> {
    let built = SUBMIT_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("folio-submit")
            .enable_all()
            .build()
            .map_err(|e| e.to_string())
    });
    built
        .as_ref()
        .map_err(|message| anyhow::anyhow!(message.clone()))
        .context("starting the submission runtime")
}

/// Drives `fut` to completion on the shared submission runtime. Fails
/// instead of panicking when called from inside another tokio runtime.
pub(crate) fn block_on<F: Future>(fut: F) -> Result<F::Output> {
    if tokio::runtime::Handle::try_current().is_ok() {
        bail!("blocking submit called from within an async runtime; use `submit().await`");
    }
    Ok(submit_runtime()?.block_on(fut))
}
