//! Sensor-placement coverage model.
//!
//! A [`Terrain`] marks which cells carry signal. Each sensor covers a
//! square footprint whose side is its coverage capacity, anchored at the
//! sensor's position and clipped to the terrain. A [`SensorState`] scores
//! the number of distinct signal cells covered by all footprints together.
//!
//! [`SensorCoverage`] adapts the model to both [`crate::bees`] and
//! [`crate::sa`]; [`Overlay`] renders a state for display.
//!
//! # Examples
//!
//! ```
//! use sensor_cover::bees::{BeesConfig, BeesRunner};
//! use sensor_cover::coverage::{Overlay, SensorCoverage};
//!
//! let problem = SensorCoverage::classic();
//! let result = BeesRunner::run(&problem, &BeesConfig::default().with_seed(1)).unwrap();
//! assert_eq!(result.best.objective(), result.best_score);
//! println!("{}", Overlay::new(&result.best));
//! ```

mod problem;
mod render;
mod state;
mod terrain;

pub use problem::SensorCoverage;
pub use render::{Overlay, OverlayCell};
pub use state::{Position, SensorMove, SensorState};
pub use terrain::Terrain;
