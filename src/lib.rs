//! Push Relay — forwards chat webhook notifications to a push endpoint.

pub mod classify;
pub mod config;
pub mod delivery;
pub mod error;
pub mod markdown;
pub mod message;
pub mod payload;

pub use classify::EventType;
pub use config::RelayConfig;
pub use delivery::{PushClient, send_push_message};
pub use error::{Error, PushError, Result};
pub use message::{Attachment, Block, Field, TextObject, WebhookMessage};
pub use payload::PushPayload;
