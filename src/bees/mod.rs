//! Bees Algorithm (BA).
//!
//! A population-based metaheuristic modelled on honey bee foraging. The
//! best-ranked solutions ("sites") are exploited by sampling recruits in a
//! patch around them, with more recruits sent to the elite sites, while
//! the rest of the colony scouts uniformly at random. The patch shrinks
//! over time.
//!
//! # References
//!
//! - Pham, Ghanbarzadeh, Koc, Otri, Rahim & Zaidi (2005), "The Bees Algorithm"
//! - Brownlee (2011), *Clever Algorithms*, ch. 6.4

mod config;
mod runner;
mod types;

pub use config::BeesConfig;
pub use runner::{BeesResult, BeesRunner, Improvement};
pub use types::BeesProblem;
