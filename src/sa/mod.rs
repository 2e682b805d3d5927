//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. At each step a random applicable action is tried;
//! improvements are always taken and worsening moves are taken with a
//! probability that shrinks as the temperature drops, allowing the search
//! to escape local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.2

mod config;
mod runner;
mod types;

pub use config::{ExpSchedule, SaConfig};
pub use runner::{metropolis_accept, SaResult, SaRunner, SaTermination};
pub use types::{SaProblem, Schedule};
