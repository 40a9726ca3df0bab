use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client used for all outbound delivery calls.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(10))
        .build()
}
