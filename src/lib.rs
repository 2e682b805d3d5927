//! Sensor-placement coverage optimization.
//!
//! Places sensors with fixed square footprints on a binary terrain so that
//! the number of covered signal cells is maximal, using one of two
//! interchangeable metaheuristics:
//!
//! - **Bees Algorithm (BA)**: Population-based search that exploits the
//!   best-ranked sites with recruited neighbourhood samples and keeps
//!   exploring with random scouts.
//! - **Simulated Annealing (SA)**: Single-trajectory search over one-step
//!   sensor moves with Metropolis acceptance and a pluggable temperature
//!   schedule.
//!
//! # Architecture
//!
//! The search engines in [`bees`] and [`sa`] are generic over problem
//! traits and contain no sensor concepts. The [`coverage`] module holds
//! the terrain and sensor model and plugs it into both engines.
//! All randomness flows through an explicitly passed RNG, seeded from the
//! configs or injected by the caller.

pub mod bees;
pub mod coverage;
pub mod error;
pub mod random;
pub mod sa;

pub use error::{ConfigError, CoverageError};
