//! Device agent trait and event subscriptions
//!
//! Scripts call these methods without knowing whether a live framework or
//! the simulator is on the other side.

use crate::{AgentResult, ItemValue, PropertyUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Shared handle to a device agent implementation
pub type SharedAgent = Arc<dyn DeviceAgent>;

/// A recorded `change` call: the items the caller asked to set.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRequest {
    pub device: String,
    pub property: String,
    pub items: Vec<(String, ItemValue)>,
}

/// Interface to the device-control framework.
///
/// Reads return `None` rather than an error when a value is unavailable;
/// `change` is fire-and-forget — the framework acknowledges through property
/// updates, not through a return value.
#[async_trait]
pub trait DeviceAgent: Send + Sync {
    /// Read a numeric property item.
    async fn number(&self, device: &str, property: &str, item: &str) -> Option<f64>;

    /// Read a text property item.
    async fn text(&self, device: &str, property: &str, item: &str) -> Option<String>;

    /// Request a property change.
    async fn change(
        &self,
        device: &str,
        property: &str,
        items: &[(&str, ItemValue)],
    ) -> AgentResult<()>;

    /// Subscribe to updates for one property of one device.
    ///
    /// The returned handle is the subscription: dropping it releases the
    /// interest in the stream.
    fn subscribe(&self, device: &str, property: &str) -> Subscription;

    /// Operator-visible log sink.
    fn log(&self, message: &str);
}

/// Handle on a filtered view of the agent's event stream.
pub struct Subscription {
    device: String,
    property: String,
    rx: broadcast::Receiver<PropertyUpdate>,
}

impl Subscription {
    pub fn new(device: &str, property: &str, rx: broadcast::Receiver<PropertyUpdate>) -> Self {
        Self {
            device: device.to_string(),
            property: property.to_string(),
            rx,
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    /// Wait for the next update matching this subscription.
    ///
    /// Non-matching updates are skipped. Returns `None` once the agent's
    /// event stream has closed. If the subscriber falls behind and the bus
    /// drops updates, the gap is logged and reception continues.
    pub async fn next(&mut self) -> Option<PropertyUpdate> {
        loop {
            match self.rx.recv().await {
                Ok(update) => {
                    if update.device == self.device && update.name == self.property {
                        return Some(update);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Subscription to {}.{} lagged, {} updates dropped",
                        self.device,
                        self.property,
                        skipped
                    );
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertyState;

    #[tokio::test]
    async fn test_subscription_filters_by_device_and_property() {
        let (tx, rx) = broadcast::channel(16);
        let mut sub = Subscription::new("Mount Agent", "MOUNT_EQUATORIAL_COORDINATES", rx);

        tx.send(PropertyUpdate::new(
            "Imager Agent",
            "CCD_EXPOSURE",
            PropertyState::Busy,
        ))
        .unwrap();
        tx.send(PropertyUpdate::new(
            "Mount Agent",
            "MOUNT_TRACKING",
            PropertyState::Ok,
        ))
        .unwrap();
        tx.send(PropertyUpdate::new(
            "Mount Agent",
            "MOUNT_EQUATORIAL_COORDINATES",
            PropertyState::Busy,
        ))
        .unwrap();

        let update = sub.next().await.unwrap();
        assert_eq!(update.device, "Mount Agent");
        assert_eq!(update.name, "MOUNT_EQUATORIAL_COORDINATES");
        assert_eq!(update.state, PropertyState::Busy);
    }

    #[tokio::test]
    async fn test_subscription_ends_when_bus_closes() {
        let (tx, rx) = broadcast::channel(16);
        let mut sub = Subscription::new("Mount Agent", "MOUNT_PARK", rx);
        drop(tx);
        assert!(sub.next().await.is_none());
    }
}
