//! Error types for Push Relay.

/// Top-level error type for the relay.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Push error: {0}")]
    Push(#[from] PushError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid endpoint URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Delivery pipeline errors — one variant per failure stage.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The payload could not be encoded as JSON.
    #[error("Failed to serialize push payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request could not be sent or no response was received.
    #[error("Push request failed: {reason}")]
    Network { reason: String },

    /// The endpoint answered outside the 2xx range.
    #[error("Push endpoint returned status {status} {reason}")]
    Delivery { status: u16, reason: String },
}

/// Result type alias for the relay.
pub type Result<T> = std::result::Result<T, Error>;
