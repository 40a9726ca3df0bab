//! Central configuration constants for delivery defaults and runtime limits.

use std::time::Duration;

/// Base URL of the EmailJS REST API.
pub const EMAILJS_API_BASE: &str = "https://api.emailjs.com";

/// Path of the send endpoint, relative to the API base.
pub const EMAILJS_SEND_PATH: &str = "api/v1.0/email/send";

/// Subject used when the sender leaves the subject field empty.
pub const DEFAULT_SUBJECT: &str = "New Contact Form Message";

/// The only HTTP status treated as a successful delivery.
pub const SUCCESS_STATUS: u16 = 200;

/// Delay before a successfully sent form closes itself (when enabled).
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Default request timeout for the delivery API, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum allowed request timeout, in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// Convenience function to clamp a timeout value into the allowed range.
pub fn clamp_timeout_secs(v: u64) -> u64 {
    v.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)
}
