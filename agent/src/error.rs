//! Agent error types

use thiserror::Error;

/// Errors surfaced by the device agent facade.
#[derive(Debug, Clone, Error)]
pub enum AgentError {
    /// Property is not defined on the device
    #[error("Property not found: {device}.{property}")]
    PropertyNotFound { device: String, property: String },

    /// Property exists but the named item is missing or of the wrong type
    #[error("Item not found: {device}.{property}.{item}")]
    ItemNotFound {
        device: String,
        property: String,
        item: String,
    },

    /// Device is not known to the agent
    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    /// Event stream closed underneath a subscriber
    #[error("Event channel closed: {0}")]
    ChannelClosed(String),
}

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;
