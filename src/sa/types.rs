//! Core traits for Simulated Annealing.

use crate::error::ConfigError;

/// Defines a Simulated Annealing problem as a state space.
///
/// The user enumerates actions and applies them; the runner picks one
/// action at random per step and decides acceptance.
///
/// # Maximization
///
/// SA maximizes `value`. For a cost, negate it.
///
/// # Examples
///
/// ```ignore
/// struct Walk { target: i64 }
///
/// impl SaProblem for Walk {
///     type State = i64;
///     type Action = i64;
///
///     fn value(&self, x: &i64) -> f64 { -((x - self.target).abs() as f64) }
///     fn actions(&self, _x: &i64) -> Vec<i64> { vec![-1, 1] }
///     fn result(&self, x: &i64, step: &i64) -> i64 { x + step }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Russell & Norvig, *AIMA* §4.1.2
pub trait SaProblem {
    /// The state representation.
    type State: Clone;

    /// A transition between states.
    type Action;

    /// Objective value of a state. Higher is better.
    fn value(&self, state: &Self::State) -> f64;

    /// All actions applicable in `state`. Empty ends the search.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

/// Maps a step number to a temperature.
///
/// A temperature of zero (or below) ends the search. Unless
/// `SaConfig::max_steps` is set, the schedule must eventually return zero
/// or the run never stops.
pub trait Schedule {
    fn temperature(&self, step: usize) -> f64;

    /// Checks the schedule's parameters. The default accepts anything.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

impl<F: Fn(usize) -> f64> Schedule for F {
    fn temperature(&self, step: usize) -> f64 {
        self(step)
    }
}
