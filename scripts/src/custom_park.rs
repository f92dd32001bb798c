//! Custom parking at a non-standard orientation
//!
//! Some older mounts only remember the celestial pole as their park
//! position. This routine slews to a configured horizontal orientation,
//! waits for the slew to finish, stops tracking, and marks the mount parked
//! there.

use crate::throttle::LogThrottle;
use serde::{Deserialize, Serialize};
use starseek_agent::properties::agent_properties::*;
use starseek_agent::properties::item_names::*;
use starseek_agent::{
    AgentError, AgentResult, ItemValue, PropertyState, PropertyUpdate, SharedAgent, Subscription,
};

const LOG_PREFIX: &str = "Custom Parking: ";

/// Configuration for a custom park run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomParkConfig {
    /// Mount agent device name
    pub mount: String,
    /// Target altitude in degrees
    pub altitude: f64,
    /// Target azimuth in degrees
    pub azimuth: f64,
}

impl Default for CustomParkConfig {
    fn default() -> Self {
        // Scope horizontal, pointing due west
        Self {
            mount: "Mount Agent".to_string(),
            altitude: 0.0,
            azimuth: 270.0,
        }
    }
}

/// Progression of one park run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParkPhase {
    AwaitingSlew,
    Complete,
}

/// Event-driven custom park state machine: a single wait for the slew to the
/// park orientation, then tracking off and park flag set.
pub struct CustomPark {
    agent: SharedAgent,
    config: CustomParkConfig,
    phase: ParkPhase,
    slew_throttle: LogThrottle,
    slew_events: Option<Subscription>,
}

impl CustomPark {
    /// Unpark the mount and start the slew to the configured orientation.
    pub async fn start(agent: SharedAgent, config: CustomParkConfig) -> AgentResult<Self> {
        agent.log(&format!("{}Script started...", LOG_PREFIX));
        agent.log("----- parameters used --------");
        agent.log(&format!("Required Azimuth: {}", config.azimuth));
        agent.log(&format!("Required Altitude: {}", config.altitude));

        agent
            .change(
                &config.mount,
                MOUNT_PARK,
                &[
                    (PARKED, ItemValue::Switch(false)),
                    (UNPARKED, ItemValue::Switch(true)),
                ],
            )
            .await?;

        // Subscribe before commanding the slew so no update can slip past
        let slew_events = agent.subscribe(&config.mount, MOUNT_HORIZONTAL_COORDINATES);

        agent
            .change(
                &config.mount,
                MOUNT_HORIZONTAL_COORDINATES,
                &[
                    (AZ, ItemValue::Number(config.azimuth)),
                    (ALT, ItemValue::Number(config.altitude)),
                ],
            )
            .await?;

        Ok(Self {
            agent,
            config,
            phase: ParkPhase::AwaitingSlew,
            slew_throttle: LogThrottle::new(),
            slew_events: Some(slew_events),
        })
    }

    pub fn phase(&self) -> ParkPhase {
        self.phase
    }

    /// Drive the park to completion over the agent's event stream.
    pub async fn run(mut self) -> AgentResult<()> {
        while self.phase != ParkPhase::Complete {
            let Some(events) = &mut self.slew_events else {
                break;
            };
            match events.next().await {
                Some(update) => self.on_update(&update).await,
                None => {
                    return Err(AgentError::ChannelClosed(
                        "agent event stream closed mid-park".to_string(),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Feed one property update to the state machine.
    pub async fn on_update(&mut self, update: &PropertyUpdate) {
        if self.phase != ParkPhase::AwaitingSlew {
            return;
        }
        if update.device != self.config.mount || update.name != MOUNT_HORIZONTAL_COORDINATES {
            return;
        }
        match update.state {
            PropertyState::Busy => {
                if self.slew_throttle.allow(chrono::Utc::now().timestamp()) {
                    self.agent.log(&format!("{}Slew in progress...", LOG_PREFIX));
                }
            }
            PropertyState::Ok => {
                self.agent.log(&format!("{}Slew complete", LOG_PREFIX));
                if let Err(e) = self
                    .agent
                    .change(
                        &self.config.mount,
                        MOUNT_TRACKING,
                        &[
                            (ON, ItemValue::Switch(false)),
                            (OFF, ItemValue::Switch(true)),
                        ],
                    )
                    .await
                {
                    tracing::warn!("Failed to stop tracking: {}", e);
                }
                if let Err(e) = self
                    .agent
                    .change(
                        &self.config.mount,
                        MOUNT_PARK,
                        &[
                            (PARKED, ItemValue::Switch(true)),
                            (UNPARKED, ItemValue::Switch(false)),
                        ],
                    )
                    .await
                {
                    tracing::warn!("Failed to set park flag: {}", e);
                }
                self.slew_events = None;
                self.phase = ParkPhase::Complete;
                self.agent.log(&format!("{}Script finished...", LOG_PREFIX));
            }
            _ => {}
        }
    }
}
