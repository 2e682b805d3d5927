//! SA execution loop.

use super::config::SaConfig;
use super::types::{SaProblem, Schedule};
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, trace};

/// Why an annealing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaTermination {
    /// The schedule returned a zero temperature.
    Frozen,
    /// `max_steps` was reached.
    StepLimit,
    /// The current state has no actions.
    NoMoves,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The state the trajectory ended in.
    pub state: S,

    /// Value of `state`.
    pub value: f64,

    /// The best state visited, which may differ from `state`.
    pub best: S,

    /// Value of `best`.
    pub best_value: f64,

    /// Steps taken (one candidate evaluation each).
    pub steps: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature at the step the run stopped.
    pub final_temperature: f64,

    pub termination: SaTermination,
}

/// Metropolis acceptance for a maximization step.
///
/// Improvements are always accepted. Otherwise the move is accepted when
/// the uniform sample `u` in `[0, 1)` falls below `exp(delta / temperature)`.
#[inline]
pub fn metropolis_accept(delta: f64, temperature: f64, u: f64) -> bool {
    delta > 0.0 || (temperature > 0.0 && u < (delta / temperature).exp())
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial`, seeding the RNG from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns the schedule's validation error, if any.
    pub fn run<P, T>(
        problem: &P,
        initial: P::State,
        schedule: &T,
        config: &SaConfig,
    ) -> Result<SaResult<P::State>, ConfigError>
    where
        P: SaProblem,
        T: Schedule + ?Sized,
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, initial, schedule, config, &mut rng)
    }

    /// Runs SA with an injected random source. `config.seed` is ignored.
    ///
    /// Each step draws one action uniformly from `problem.actions`, and
    /// draws an acceptance sample only for non-improving candidates. A
    /// rejected candidate still consumes a step.
    pub fn run_with_rng<P, T, R>(
        problem: &P,
        initial: P::State,
        schedule: &T,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::State>, ConfigError>
    where
        P: SaProblem,
        T: Schedule + ?Sized,
        R: Rng,
    {
        schedule.validate()?;

        let mut current_value = problem.value(&initial);
        let mut current = initial;
        let mut best = current.clone();
        let mut best_value = current_value;

        let mut step = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature = schedule.temperature(0);

        let termination = loop {
            if config.max_steps > 0 && step >= config.max_steps {
                break SaTermination::StepLimit;
            }

            temperature = schedule.temperature(step);
            if temperature.is_nan() || temperature <= 0.0 {
                break SaTermination::Frozen;
            }

            let actions = problem.actions(&current);
            if actions.is_empty() {
                break SaTermination::NoMoves;
            }

            let action = &actions[rng.random_range(0..actions.len())];
            let candidate = problem.result(&current, action);
            let candidate_value = problem.value(&candidate);
            let delta = candidate_value - current_value;

            let accept = delta > 0.0
                || metropolis_accept(delta, temperature, rng.random_range(0.0..1.0));
            trace!(step, temperature, delta, accept, "annealing step");

            if accept {
                if delta > 0.0 {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = candidate;
                current_value = candidate_value;

                if current_value > best_value {
                    best = current.clone();
                    best_value = current_value;
                }
            }

            step += 1;
        };

        debug!(
            ?termination,
            steps = step,
            accepted_moves,
            value = current_value,
            best_value,
            "annealing finished"
        );

        Ok(SaResult {
            state: current,
            value: current_value,
            best,
            best_value,
            steps: step,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            termination,
        })
    }
}
