//! Automation scripts for INDIGO-style mount and imager agents
//!
//! Two routines, both driven by property-update events from a
//! [`DeviceAgent`](starseek_agent::DeviceAgent):
//!
//! - **Spiral search** ([`SpiralSearch`]): after an imprecise GOTO, walks the
//!   mount through an expanding square spiral and images every point so a
//!   small-field target can be located by eye.
//! - **Custom parking** ([`CustomPark`]): slews the mount to a configured
//!   horizontal orientation, stops tracking, and marks it parked there.

pub mod coords;
pub mod custom_park;
pub mod search_path;
pub mod spiral_search;
pub mod throttle;

pub use coords::{format_base60, EquatorialPosition};
pub use custom_park::{CustomPark, CustomParkConfig, ParkPhase};
pub use search_path::{OffsetStep, SearchPath};
pub use spiral_search::{RunPhase, SearchReport, SpiralSearch, SpiralSearchConfig};
pub use throttle::LogThrottle;
