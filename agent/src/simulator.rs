//! In-memory agent simulator
//!
//! Stands in for the device framework so scripts can be exercised without a
//! mount attached — the same role the framework's own device simulators play,
//! but in-process and scriptable. Property values are seeded by the caller,
//! every `change` request is recorded, and state transitions (busy, ok) are
//! published explicitly via [`SimulatorAgent::post_update`].

use crate::facade::{ChangeRequest, DeviceAgent, Subscription};
use crate::{AgentResult, ItemValue, PropertyState, PropertyUpdate};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::{broadcast, RwLock};

type ItemStore = HashMap<(String, String, String), ItemValue>;

pub struct SimulatorAgent {
    store: RwLock<ItemStore>,
    events: broadcast::Sender<PropertyUpdate>,
    changes: Mutex<Vec<ChangeRequest>>,
    logs: Mutex<Vec<String>>,
}

impl SimulatorAgent {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            store: RwLock::new(HashMap::new()),
            events,
            changes: Mutex::new(Vec::new()),
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Seed one property item.
    pub async fn set_item(&self, device: &str, property: &str, item: &str, value: ItemValue) {
        let mut store = self.store.write().await;
        store.insert(
            (device.to_string(), property.to_string(), item.to_string()),
            value,
        );
    }

    pub async fn set_number(&self, device: &str, property: &str, item: &str, value: f64) {
        self.set_item(device, property, item, ItemValue::Number(value))
            .await;
    }

    pub async fn set_text(&self, device: &str, property: &str, item: &str, value: &str) {
        self.set_item(device, property, item, ItemValue::Text(value.to_string()))
            .await;
    }

    /// Publish a property update to all subscribers, folding any carried
    /// items into the store first.
    pub async fn post_update(
        &self,
        device: &str,
        property: &str,
        state: PropertyState,
        items: &[(&str, ItemValue)],
    ) {
        let mut update = PropertyUpdate::new(device, property, state);
        {
            let mut store = self.store.write().await;
            for (item, value) in items {
                store.insert(
                    (device.to_string(), property.to_string(), item.to_string()),
                    value.clone(),
                );
                update.items.insert(item.to_string(), value.clone());
            }
        }
        // No subscribers is fine; updates for unwatched properties just drop.
        let _ = self.events.send(update);
    }

    /// Every `change` request received so far, oldest first.
    pub fn change_requests(&self) -> Vec<ChangeRequest> {
        self.changes.lock().unwrap().clone()
    }

    /// Requests received for one device/property pair, oldest first.
    pub fn change_requests_for(&self, device: &str, property: &str) -> Vec<ChangeRequest> {
        self.changes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.device == device && r.property == property)
            .cloned()
            .collect()
    }

    /// Operator log lines received so far.
    pub fn log_lines(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }
}

impl Default for SimulatorAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceAgent for SimulatorAgent {
    async fn number(&self, device: &str, property: &str, item: &str) -> Option<f64> {
        let store = self.store.read().await;
        store
            .get(&(device.to_string(), property.to_string(), item.to_string()))
            .and_then(ItemValue::as_number)
    }

    async fn text(&self, device: &str, property: &str, item: &str) -> Option<String> {
        let store = self.store.read().await;
        store
            .get(&(device.to_string(), property.to_string(), item.to_string()))
            .and_then(|v| v.as_text().map(str::to_string))
    }

    async fn change(
        &self,
        device: &str,
        property: &str,
        items: &[(&str, ItemValue)],
    ) -> AgentResult<()> {
        let request = ChangeRequest {
            device: device.to_string(),
            property: property.to_string(),
            items: items
                .iter()
                .map(|(item, value)| (item.to_string(), value.clone()))
                .collect(),
        };
        tracing::debug!(
            "change {}.{}: {} item(s)",
            device,
            property,
            request.items.len()
        );
        self.changes.lock().unwrap().push(request);

        // A real agent applies the request to the device; here it only lands
        // in the store. The resulting busy/ok transitions are scripted by the
        // caller through post_update.
        let mut store = self.store.write().await;
        for (item, value) in items {
            store.insert(
                (device.to_string(), property.to_string(), item.to_string()),
                value.clone(),
            );
        }
        Ok(())
    }

    fn subscribe(&self, device: &str, property: &str) -> Subscription {
        Subscription::new(device, property, self.events.subscribe())
    }

    fn log(&self, message: &str) {
        tracing::info!("{}", message);
        self.logs.lock().unwrap().push(message.to_string());
    }
}
