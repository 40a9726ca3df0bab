pub mod delivery;
pub mod net;

// Re-exports for convenience
pub use delivery::{
    BridgeState, ClientLoader, DeliveryBridge, DeliveryError, DeliveryResult, DeliverySettings,
    EmailJsClient, EmailJsLoader, MailClient, SendReceipt, SendResponse,
};
pub use net::default_http_client;
