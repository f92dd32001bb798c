//! Spiral search around an imprecise GOTO
//!
//! At long focal lengths with a small sensor, a mount's GOTO can drop the
//! target just outside the frame. This routine walks the mount through an
//! expanding square spiral from wherever the GOTO landed, taking an image at
//! every point, so the target can be located by eye afterwards. Each frame's
//! FITS header carries the commanded coordinates (SrchRA/SrchDec) for a
//! follow-up GOTO once the target is spotted.
//!
//! The search assumes a GOTO has just been performed and an equatorial mount
//! is in use; the step size is a reduced fraction of the field of view so a
//! camera not aligned with the equatorial axes cannot open gaps between
//! frames.

use crate::coords::{format_base60, EquatorialPosition};
use crate::search_path::SearchPath;
use crate::throttle::LogThrottle;
use serde::{Deserialize, Serialize};
use starseek_agent::properties::agent_properties::*;
use starseek_agent::properties::item_names::*;
use starseek_agent::{
    AgentError, AgentResult, ItemValue, PropertyState, PropertyUpdate, SharedAgent, Subscription,
};

const SEARCH_RA_KEYWORD: &str = "SrchRA";
const SEARCH_DEC_KEYWORD: &str = "SrchDec";

/// Configuration for a spiral search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiralSearchConfig {
    /// Mount agent device name
    pub mount: String,
    /// Imager agent device name
    pub imager: String,
    /// Directory the imager saves frames into
    pub image_dir: String,
    /// Fraction of the field of view to step by; below 1.0 leaves overlap
    /// between neighboring frames
    pub reduction_factor: f64,
    /// Exposure time per search point, in seconds
    pub exposure_secs: f64,
    /// Number of spiral rings to walk
    pub loops: u32,
    /// Filename prefix for saved frames; the step index is appended
    pub image_prefix: String,
}

impl Default for SpiralSearchConfig {
    fn default() -> Self {
        Self {
            mount: "Mount Agent".to_string(),
            imager: "Imager Agent".to_string(),
            image_dir: "/tmp/starseek".to_string(),
            reduction_factor: 0.8,
            exposure_secs: 0.75,
            loops: 3,
            image_prefix: "SEARCH_".to_string(),
        }
    }
}

/// Progression of one search run.
///
/// AwaitingSlew and AwaitingExposure are mutually exclusive; Complete is
/// terminal — a fresh run requires a new [`SpiralSearch::start`] after the
/// next GOTO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Idle,
    AwaitingSlew,
    AwaitingExposure,
    Complete,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport {
    pub images_taken: usize,
    pub final_position: EquatorialPosition,
}

/// Event-driven spiral search state machine.
///
/// "Waiting" for a slew or an exposure is a resting state between property
/// updates, not a blocking call: the machine only acts inside
/// [`SpiralSearch::on_update`], invoked once per delivered notification.
pub struct SpiralSearch {
    agent: SharedAgent,
    config: SpiralSearchConfig,
    path: SearchPath,
    position: EquatorialPosition,
    cursor: usize,
    phase: RunPhase,
    exposing: bool,
    images_taken: usize,
    slew_throttle: LogThrottle,
    slew_events: Option<Subscription>,
    exposure_events: Option<Subscription>,
}

impl SpiralSearch {
    /// Begin a search from the mount's current position.
    ///
    /// Step sizes derive from the imager's reported field of view scaled by
    /// the reduction factor, with the RA step converted from degrees to
    /// hours.
    pub async fn start(agent: SharedAgent, config: SpiralSearchConfig) -> AgentResult<Self> {
        let fov_width = read_number(&agent, &config.imager, CCD_LENS_FOV, FOV_WIDTH).await?;
        let fov_height = read_number(&agent, &config.imager, CCD_LENS_FOV, FOV_HEIGHT).await?;

        // RA coordinates are in hours, not degrees
        let step_ra = fov_width * config.reduction_factor / 15.0;
        let step_dec = fov_height * config.reduction_factor;
        tracing::debug!("RA step size: {:.5}h, Dec step size: {:.5}°", step_ra, step_dec);

        let path = SearchPath::generate(config.loops, step_ra, step_dec);
        Self::with_path(agent, config, path).await
    }

    /// Begin a search over an explicit path.
    ///
    /// Used by [`SpiralSearch::start`]; callable directly when a custom
    /// pattern is wanted. An empty path retires immediately without issuing
    /// any device command.
    pub async fn with_path(
        agent: SharedAgent,
        config: SpiralSearchConfig,
        path: SearchPath,
    ) -> AgentResult<Self> {
        agent.log("Spiral search starting...");

        let ra = read_number(&agent, &config.mount, MOUNT_EQUATORIAL_COORDINATES, RA).await?;
        let dec = read_number(&agent, &config.mount, MOUNT_EQUATORIAL_COORDINATES, DEC).await?;
        let position = EquatorialPosition::new(ra, dec);
        tracing::debug!("starting at RA: {:.5}, Dec: {:.5}", ra, dec);

        if path.is_empty() {
            agent.log("Search complete!");
            return Ok(Self {
                agent,
                config,
                path,
                position,
                cursor: 0,
                phase: RunPhase::Complete,
                exposing: false,
                images_taken: 0,
                slew_throttle: LogThrottle::new(),
                slew_events: None,
                exposure_events: None,
            });
        }

        agent
            .change(
                &config.imager,
                CCD_UPLOAD_MODE,
                &[
                    (CLIENT, ItemValue::Switch(false)),
                    (LOCAL, ItemValue::Switch(true)),
                    (BOTH, ItemValue::Switch(false)),
                ],
            )
            .await?;
        agent
            .change(&config.imager, CCD_FRAME_TYPE, &[(LIGHT, ItemValue::Switch(true))])
            .await?;
        agent
            .change(&config.imager, CCD_IMAGE_FORMAT, &[(FITS, ItemValue::Switch(true))])
            .await?;
        agent
            .change(
                &config.imager,
                CCD_LOCAL_MODE,
                &[(DIR, ItemValue::Text(config.image_dir.clone()))],
            )
            .await?;

        let slew_events = agent.subscribe(&config.mount, MOUNT_EQUATORIAL_COORDINATES);
        let exposure_events = agent.subscribe(&config.imager, CCD_EXPOSURE);

        let mut search = Self {
            agent,
            config,
            path,
            position,
            cursor: 0,
            phase: RunPhase::Idle,
            exposing: false,
            images_taken: 0,
            slew_throttle: LogThrottle::new(),
            slew_events: Some(slew_events),
            exposure_events: Some(exposure_events),
        };
        search.advance_to_cursor().await?;
        Ok(search)
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn position(&self) -> EquatorialPosition {
        self.position
    }

    pub fn images_taken(&self) -> usize {
        self.images_taken
    }

    pub fn path(&self) -> &SearchPath {
        &self.path
    }

    /// Drive the search to completion over the agent's event stream.
    pub async fn run(mut self) -> AgentResult<SearchReport> {
        while self.phase != RunPhase::Complete {
            let update = {
                let (Some(slew), Some(exposure)) =
                    (&mut self.slew_events, &mut self.exposure_events)
                else {
                    break;
                };
                tokio::select! {
                    u = slew.next() => u,
                    u = exposure.next() => u,
                }
            };
            match update {
                Some(update) => self.on_update(&update).await,
                None => {
                    return Err(AgentError::ChannelClosed(
                        "agent event stream closed mid-search".to_string(),
                    ))
                }
            }
        }
        Ok(SearchReport {
            images_taken: self.images_taken,
            final_position: self.position,
        })
    }

    /// Feed one property update to the state machine.
    ///
    /// Updates that do not match the awaited device, property, and state are
    /// ignored. Called by [`SpiralSearch::run`]; exposed so a caller with
    /// its own dispatch loop can deliver notifications directly.
    pub async fn on_update(&mut self, update: &PropertyUpdate) {
        match self.phase {
            RunPhase::AwaitingSlew => self.on_slew_update(update).await,
            RunPhase::AwaitingExposure => self.on_exposure_update(update).await,
            RunPhase::Idle | RunPhase::Complete => {}
        }
    }

    async fn on_slew_update(&mut self, update: &PropertyUpdate) {
        if update.device != self.config.mount || update.name != MOUNT_EQUATORIAL_COORDINATES {
            return;
        }
        match update.state {
            PropertyState::Busy => {
                if self.slew_throttle.allow(chrono::Utc::now().timestamp()) {
                    self.agent.log("Moving to next point in pattern");
                }
            }
            PropertyState::Ok => {
                self.exposing = false;
                self.phase = RunPhase::AwaitingExposure;
                if let Err(e) = self
                    .agent
                    .change(
                        &self.config.imager,
                        CCD_EXPOSURE,
                        &[(EXPOSURE, ItemValue::Number(self.config.exposure_secs))],
                    )
                    .await
                {
                    tracing::warn!("Failed to start exposure: {}", e);
                }
            }
            _ => {}
        }
    }

    async fn on_exposure_update(&mut self, update: &PropertyUpdate) {
        if update.device != self.config.imager || update.name != CCD_EXPOSURE {
            return;
        }
        match update.state {
            PropertyState::Busy if !self.exposing => {
                tracing::debug!("Exposure in progress...");
                self.exposing = true;
            }
            // Repeated busy updates while already exposing carry no news
            PropertyState::Busy => {}
            PropertyState::Ok if self.exposing => {
                self.exposing = false;
                tracing::debug!("Exposure completed");
                if let Some(file) = self
                    .agent
                    .text(&self.config.imager, CCD_IMAGE_FILE, FILE)
                    .await
                {
                    self.agent.log(&format!("Image saved: {}", file));
                }
                self.images_taken += 1;
                self.cursor += 1;
                if self.cursor < self.path.len() {
                    if let Err(e) = self.advance_to_cursor().await {
                        tracing::warn!("Failed to advance search: {}", e);
                    }
                } else {
                    self.retire();
                }
            }
            _ => {}
        }
    }

    /// Move to the point at the current cursor: accumulate the offset, push
    /// the new coordinates to the mount, and tag the upcoming frame.
    async fn advance_to_cursor(&mut self) -> AgentResult<()> {
        let step = match self.path.get(self.cursor) {
            Some(step) => step,
            None => return Ok(()),
        };
        let image_name = format!("{}{}", self.config.image_prefix, self.cursor);
        let position = self.position.advance(step);
        tracing::debug!(
            "step: {}, RA: {:.5}, Dec: {:.5}",
            self.cursor,
            position.ra,
            position.dec
        );

        self.agent
            .change(
                &self.config.mount,
                MOUNT_EQUATORIAL_COORDINATES,
                &[
                    (RA, ItemValue::Number(position.ra)),
                    (DEC, ItemValue::Number(position.dec)),
                ],
            )
            .await?;
        self.agent
            .change(
                &self.config.imager,
                CCD_LOCAL_MODE,
                &[(PREFIX, ItemValue::Text(image_name))],
            )
            .await?;
        self.agent
            .change(
                &self.config.imager,
                CCD_SET_FITS_HEADER,
                &[
                    (KEYWORD, ItemValue::Text(SEARCH_RA_KEYWORD.to_string())),
                    (VALUE, ItemValue::Text(format_base60(position.ra))),
                ],
            )
            .await?;
        self.agent
            .change(
                &self.config.imager,
                CCD_SET_FITS_HEADER,
                &[
                    (KEYWORD, ItemValue::Text(SEARCH_DEC_KEYWORD.to_string())),
                    (VALUE, ItemValue::Text(format_base60(position.dec))),
                ],
            )
            .await?;

        self.phase = RunPhase::AwaitingSlew;
        self.exposing = false;
        Ok(())
    }

    /// Release both subscriptions and finish the run.
    fn retire(&mut self) {
        self.slew_events = None;
        self.exposure_events = None;
        self.phase = RunPhase::Complete;
        self.agent.log("Search complete!");
    }
}

async fn read_number(
    agent: &SharedAgent,
    device: &str,
    property: &str,
    item: &str,
) -> AgentResult<f64> {
    agent
        .number(device, property, item)
        .await
        .ok_or_else(|| AgentError::ItemNotFound {
            device: device.to_string(),
            property: property.to_string(),
            item: item.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use starseek_agent::SimulatorAgent;
    use std::sync::Arc;
    use std::time::Duration;

    const MOUNT: &str = "Mount Agent";
    const IMAGER: &str = "Imager Agent";

    fn test_config() -> SpiralSearchConfig {
        SpiralSearchConfig {
            image_dir: "/data/search".to_string(),
            // With a 15°×2° seeded FOV this yields step_ra=1.0h, step_dec=2.0°
            reduction_factor: 1.0,
            ..SpiralSearchConfig::default()
        }
    }

    async fn seeded_agent() -> Arc<SimulatorAgent> {
        let agent = Arc::new(SimulatorAgent::new());
        agent
            .set_number(MOUNT, MOUNT_EQUATORIAL_COORDINATES, RA, 5.0)
            .await;
        agent
            .set_number(MOUNT, MOUNT_EQUATORIAL_COORDINATES, DEC, 10.0)
            .await;
        agent.set_number(IMAGER, CCD_LENS_FOV, FOV_WIDTH, 15.0).await;
        agent.set_number(IMAGER, CCD_LENS_FOV, FOV_HEIGHT, 2.0).await;
        agent
    }

    fn slew_update(state: PropertyState) -> PropertyUpdate {
        PropertyUpdate::new(MOUNT, MOUNT_EQUATORIAL_COORDINATES, state)
    }

    fn exposure_update(state: PropertyState) -> PropertyUpdate {
        PropertyUpdate::new(IMAGER, CCD_EXPOSURE, state)
    }

    #[tokio::test]
    async fn test_start_configures_imager_and_issues_first_slew() {
        let agent = seeded_agent().await;
        let search = SpiralSearch::start(agent.clone(), test_config()).await.unwrap();

        assert_eq!(search.phase(), RunPhase::AwaitingSlew);
        assert_eq!(search.cursor(), 0);
        // First offset is (+step_ra, 0)
        assert_eq!(search.position(), EquatorialPosition::new(6.0, 10.0));

        let slews = agent.change_requests_for(MOUNT, MOUNT_EQUATORIAL_COORDINATES);
        assert_eq!(slews.len(), 1);
        assert_eq!(
            slews[0].items,
            vec![
                (RA.to_string(), ItemValue::Number(6.0)),
                (DEC.to_string(), ItemValue::Number(10.0)),
            ]
        );

        assert_eq!(agent.change_requests_for(IMAGER, CCD_UPLOAD_MODE).len(), 1);
        assert_eq!(agent.change_requests_for(IMAGER, CCD_FRAME_TYPE).len(), 1);
        assert_eq!(agent.change_requests_for(IMAGER, CCD_IMAGE_FORMAT).len(), 1);

        // Output directory first, then the frame prefix for point 0
        let local_mode = agent.change_requests_for(IMAGER, CCD_LOCAL_MODE);
        assert_eq!(local_mode.len(), 2);
        assert_eq!(
            local_mode[0].items,
            vec![(DIR.to_string(), ItemValue::Text("/data/search".to_string()))]
        );
        assert_eq!(
            local_mode[1].items,
            vec![(PREFIX.to_string(), ItemValue::Text("SEARCH_0".to_string()))]
        );

        let headers = agent.change_requests_for(IMAGER, CCD_SET_FITS_HEADER);
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers[0].items,
            vec![
                (KEYWORD.to_string(), ItemValue::Text("SrchRA".to_string())),
                (VALUE.to_string(), ItemValue::Text(" 6:0:0.00000".to_string())),
            ]
        );
        assert_eq!(
            headers[1].items,
            vec![
                (KEYWORD.to_string(), ItemValue::Text("SrchDec".to_string())),
                (VALUE.to_string(), ItemValue::Text(" 10:0:0.00000".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_slew_completion_starts_exposure() {
        let agent = seeded_agent().await;
        let mut search = SpiralSearch::start(agent.clone(), test_config()).await.unwrap();

        search.on_update(&slew_update(PropertyState::Ok)).await;

        assert_eq!(search.phase(), RunPhase::AwaitingExposure);
        let exposures = agent.change_requests_for(IMAGER, CCD_EXPOSURE);
        assert_eq!(exposures.len(), 1);
        assert_eq!(
            exposures[0].items,
            vec![(EXPOSURE.to_string(), ItemValue::Number(0.75))]
        );
    }

    #[tokio::test]
    async fn test_repeated_exposure_busy_is_idempotent() {
        let agent = seeded_agent().await;
        let mut search = SpiralSearch::start(agent.clone(), test_config()).await.unwrap();
        search.on_update(&slew_update(PropertyState::Ok)).await;

        search.on_update(&exposure_update(PropertyState::Busy)).await;
        let commands_after_first_busy = agent.change_requests().len();
        let cursor_after_first_busy = search.cursor();

        search.on_update(&exposure_update(PropertyState::Busy)).await;
        search.on_update(&exposure_update(PropertyState::Busy)).await;

        assert_eq!(agent.change_requests().len(), commands_after_first_busy);
        assert_eq!(search.cursor(), cursor_after_first_busy);
        assert_eq!(search.phase(), RunPhase::AwaitingExposure);
    }

    #[tokio::test]
    async fn test_slew_busy_progress_log_is_throttled() {
        let agent = seeded_agent().await;
        let mut search = SpiralSearch::start(agent.clone(), test_config()).await.unwrap();

        for _ in 0..4 {
            search.on_update(&slew_update(PropertyState::Busy)).await;
        }

        let progress_lines = agent
            .log_lines()
            .iter()
            .filter(|line| line.as_str() == "Moving to next point in pattern")
            .count();
        // Four updates inside the same second collapse to one line (two if
        // the test happens to straddle a second boundary)
        assert!(progress_lines >= 1 && progress_lines <= 2);
        assert_eq!(search.phase(), RunPhase::AwaitingSlew);
    }

    #[tokio::test]
    async fn test_exposure_ok_without_busy_is_ignored() {
        let agent = seeded_agent().await;
        let mut search = SpiralSearch::start(agent.clone(), test_config()).await.unwrap();
        search.on_update(&slew_update(PropertyState::Ok)).await;

        search.on_update(&exposure_update(PropertyState::Ok)).await;

        assert_eq!(search.cursor(), 0);
        assert_eq!(search.phase(), RunPhase::AwaitingExposure);
    }

    #[tokio::test]
    async fn test_unrelated_updates_are_ignored() {
        let agent = seeded_agent().await;
        let mut search = SpiralSearch::start(agent.clone(), test_config()).await.unwrap();
        let commands = agent.change_requests().len();

        // Wrong property, wrong device, wrong state
        search
            .on_update(&PropertyUpdate::new(MOUNT, MOUNT_TRACKING, PropertyState::Ok))
            .await;
        search
            .on_update(&PropertyUpdate::new(
                "Guider Agent",
                MOUNT_EQUATORIAL_COORDINATES,
                PropertyState::Ok,
            ))
            .await;
        search.on_update(&slew_update(PropertyState::Alert)).await;

        assert_eq!(search.phase(), RunPhase::AwaitingSlew);
        assert_eq!(agent.change_requests().len(), commands);
    }

    #[tokio::test]
    async fn test_exposure_completion_advances_to_next_point() {
        let agent = seeded_agent().await;
        agent
            .set_text(IMAGER, CCD_IMAGE_FILE, FILE, "/data/search/SEARCH_0.fits")
            .await;
        let mut search = SpiralSearch::start(agent.clone(), test_config()).await.unwrap();

        search.on_update(&slew_update(PropertyState::Ok)).await;
        search.on_update(&exposure_update(PropertyState::Busy)).await;
        search.on_update(&exposure_update(PropertyState::Ok)).await;

        assert_eq!(search.cursor(), 1);
        assert_eq!(search.phase(), RunPhase::AwaitingSlew);
        // Step 1 is (0, -step_dec)
        assert_eq!(search.position(), EquatorialPosition::new(6.0, 8.0));
        assert_eq!(
            agent.change_requests_for(MOUNT, MOUNT_EQUATORIAL_COORDINATES).len(),
            2
        );
        assert!(agent
            .log_lines()
            .contains(&"Image saved: /data/search/SEARCH_0.fits".to_string()));
    }

    #[tokio::test]
    async fn test_full_run_completes_after_57_points() {
        let agent = seeded_agent().await;
        let mut search = SpiralSearch::start(agent.clone(), test_config()).await.unwrap();
        assert_eq!(search.path().len(), 57);

        for _ in 0..57 {
            search.on_update(&slew_update(PropertyState::Ok)).await;
            search.on_update(&exposure_update(PropertyState::Busy)).await;
            search.on_update(&exposure_update(PropertyState::Ok)).await;
        }

        assert_eq!(search.phase(), RunPhase::Complete);
        assert_eq!(search.images_taken(), 57);
        assert_eq!(search.cursor(), 57);
        // The homing step returns the mount to the GOTO point
        assert_eq!(search.position(), EquatorialPosition::new(5.0, 10.0));
        assert_eq!(
            agent.change_requests_for(MOUNT, MOUNT_EQUATORIAL_COORDINATES).len(),
            57
        );
        assert_eq!(agent.change_requests_for(IMAGER, CCD_EXPOSURE).len(), 57);
        assert!(agent.log_lines().contains(&"Search complete!".to_string()));

        // Terminal: further updates issue nothing
        let commands = agent.change_requests().len();
        search.on_update(&slew_update(PropertyState::Ok)).await;
        search.on_update(&exposure_update(PropertyState::Ok)).await;
        assert_eq!(agent.change_requests().len(), commands);
    }

    #[tokio::test]
    async fn test_empty_path_retires_without_commands() {
        let agent = seeded_agent().await;
        let search =
            SpiralSearch::with_path(agent.clone(), test_config(), SearchPath::from_steps(vec![]))
                .await
                .unwrap();

        assert_eq!(search.phase(), RunPhase::Complete);
        assert!(agent.change_requests().is_empty());
        assert!(agent.log_lines().contains(&"Search complete!".to_string()));
    }

    #[tokio::test]
    async fn test_start_fails_without_fov() {
        let agent = Arc::new(SimulatorAgent::new());
        agent
            .set_number(MOUNT, MOUNT_EQUATORIAL_COORDINATES, RA, 5.0)
            .await;
        agent
            .set_number(MOUNT, MOUNT_EQUATORIAL_COORDINATES, DEC, 10.0)
            .await;

        let result = SpiralSearch::start(agent, test_config()).await;
        assert!(matches!(result, Err(AgentError::ItemNotFound { .. })));
    }

    async fn wait_until<F: Fn() -> bool>(condition: F) {
        for _ in 0..1000 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("condition not reached within 2s");
    }

    #[tokio::test]
    async fn test_run_loop_drives_search_over_event_stream() {
        let agent = seeded_agent().await;
        let mut config = test_config();
        config.loops = 1; // 13 points
        let search = SpiralSearch::start(agent.clone(), config).await.unwrap();
        let points = search.path().len();
        assert_eq!(points, 13);

        let runner = tokio::spawn(search.run());

        for i in 0..points {
            let agent = agent.clone();
            wait_until(|| {
                agent
                    .change_requests_for(MOUNT, MOUNT_EQUATORIAL_COORDINATES)
                    .len()
                    > i
            })
            .await;
            agent
                .post_update(MOUNT, MOUNT_EQUATORIAL_COORDINATES, PropertyState::Ok, &[])
                .await;

            wait_until(|| agent.change_requests_for(IMAGER, CCD_EXPOSURE).len() > i).await;
            agent
                .post_update(IMAGER, CCD_EXPOSURE, PropertyState::Busy, &[])
                .await;
            agent
                .post_update(IMAGER, CCD_EXPOSURE, PropertyState::Ok, &[])
                .await;
        }

        let report = runner.await.unwrap().unwrap();
        assert_eq!(report.images_taken, 13);
        assert_eq!(report.final_position, EquatorialPosition::new(5.0, 10.0));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = SpiralSearchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SpiralSearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reduction_factor, config.reduction_factor);
        assert_eq!(back.exposure_secs, config.exposure_secs);
        assert_eq!(back.loops, config.loops);
        assert_eq!(back.mount, config.mount);
    }
}
