//! Device agent facade for INDIGO-style automation
//!
//! Models the slice of the INDIGO agent surface that automation scripts talk
//! to: named properties carrying typed items, property states, asynchronous
//! property-update events, and fire-and-forget change requests.
//!
//! The actual device framework (TCP transport, drivers, FITS writing) lives
//! outside this crate; scripts depend only on the [`DeviceAgent`] trait, and
//! the bundled [`SimulatorAgent`] stands in for the real thing during dry
//! runs and tests.

mod error;
mod facade;
pub mod properties;
mod simulator;

pub use error::{AgentError, AgentResult};
pub use facade::{ChangeRequest, DeviceAgent, SharedAgent, Subscription};
pub use simulator::SimulatorAgent;

use std::collections::HashMap;

/// State of a device property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyState {
    Idle,
    Ok,
    Busy,
    Alert,
}

impl PropertyState {
    /// Parse a state string as reported by the framework.
    ///
    /// Comparison is case-insensitive: different framework versions report
    /// `"Ok"`, `"OK"` or `"ok"` for the same state, so normalization happens
    /// here and nowhere else.
    pub fn parse(text: &str) -> Option<Self> {
        match text.to_ascii_uppercase().as_str() {
            "IDLE" => Some(PropertyState::Idle),
            "OK" => Some(PropertyState::Ok),
            "BUSY" => Some(PropertyState::Busy),
            "ALERT" => Some(PropertyState::Alert),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyState::Idle => "Idle",
            PropertyState::Ok => "Ok",
            PropertyState::Busy => "Busy",
            PropertyState::Alert => "Alert",
        }
    }

    pub fn is_busy(self) -> bool {
        self == PropertyState::Busy
    }

    pub fn is_ok(self) -> bool {
        self == PropertyState::Ok
    }
}

impl std::fmt::Display for PropertyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a single property item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    Number(f64),
    Switch(bool),
    Text(String),
}

impl ItemValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ItemValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_switch(&self) -> Option<bool> {
        match self {
            ItemValue::Switch(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ItemValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<f64> for ItemValue {
    fn from(v: f64) -> Self {
        ItemValue::Number(v)
    }
}

impl From<bool> for ItemValue {
    fn from(v: bool) -> Self {
        ItemValue::Switch(v)
    }
}

impl From<&str> for ItemValue {
    fn from(v: &str) -> Self {
        ItemValue::Text(v.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(v: String) -> Self {
        ItemValue::Text(v)
    }
}

/// A property-update notification from the framework.
#[derive(Debug, Clone)]
pub struct PropertyUpdate {
    pub device: String,
    pub name: String,
    pub state: PropertyState,
    pub items: HashMap<String, ItemValue>,
}

impl PropertyUpdate {
    pub fn new(device: &str, name: &str, state: PropertyState) -> Self {
        Self {
            device: device.to_string(),
            name: name.to_string(),
            state,
            items: HashMap::new(),
        }
    }

    /// Read a numeric item from the update payload, if present.
    pub fn number(&self, item: &str) -> Option<f64> {
        self.items.get(item).and_then(ItemValue::as_number)
    }

    /// Read a text item from the update payload, if present.
    pub fn text(&self, item: &str) -> Option<&str> {
        self.items.get(item).and_then(ItemValue::as_text)
    }
}
