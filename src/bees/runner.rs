//! Bees Algorithm execution loop.
//!
//! Each generation:
//!
//! 1. Score the new bees and rank the population (best first, stable)
//! 2. Record a new best-ever and notify the observer
//! 3. Recruit bees around the top `num_sites` sites; the best recruit of
//!    each site moves on to the next generation
//! 4. Fill the remaining slots with scouts
//! 5. Possibly shrink the patch

use super::config::BeesConfig;
use super::types::BeesProblem;
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Result of a Bees Algorithm run.
#[derive(Debug, Clone)]
pub struct BeesResult<S: Clone, F> {
    /// The best solution seen in any generation.
    pub best: S,

    /// Score of `best`.
    pub best_score: F,

    /// Generations executed.
    pub generations: usize,

    /// Patch size after the last decay step.
    pub final_patch_size: usize,

    /// Best-ever score at the end of each generation. Non-decreasing.
    pub score_history: Vec<F>,
}

/// Reported to the observer whenever the best-ever solution improves.
#[derive(Debug)]
pub struct Improvement<'a, S, F> {
    /// Zero-based generation in which the improvement was found.
    pub generation: usize,
    pub solution: &'a S,
    pub score: F,
}

#[derive(Clone)]
struct Bee<S, F> {
    solution: S,
    score: F,
}

/// Executes the Bees Algorithm.
pub struct BeesRunner;

impl BeesRunner {
    /// Runs the Bees Algorithm, seeding the RNG from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found by
    /// [`BeesConfig::validate_for`].
    pub fn run<P: BeesProblem>(
        problem: &P,
        config: &BeesConfig,
    ) -> Result<BeesResult<P::Solution, P::Score>, ConfigError> {
        Self::run_with_observer(problem, config, |_| {})
    }

    /// Runs the Bees Algorithm and calls `on_improvement` for every new
    /// best-ever solution.
    pub fn run_with_observer<P, O>(
        problem: &P,
        config: &BeesConfig,
        on_improvement: O,
    ) -> Result<BeesResult<P::Solution, P::Score>, ConfigError>
    where
        P: BeesProblem,
        O: FnMut(&Improvement<'_, P::Solution, P::Score>),
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng, on_improvement)
    }

    /// Runs the Bees Algorithm with an injected random source.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P, R, O>(
        problem: &P,
        config: &BeesConfig,
        rng: &mut R,
        mut on_improvement: O,
    ) -> Result<BeesResult<P::Solution, P::Score>, ConfigError>
    where
        P: BeesProblem,
        R: Rng,
        O: FnMut(&Improvement<'_, P::Solution, P::Score>),
    {
        config.validate_for(problem.dimension())?;

        let mut patch_size = config.patch_size;
        let mut sites: Vec<Bee<P::Solution, P::Score>> = Vec::with_capacity(config.num_sites);
        let mut scouts: Vec<P::Solution> = (0..config.population_size)
            .map(|_| problem.scout(rng))
            .collect();

        let mut best: Option<Bee<P::Solution, P::Score>> = None;
        let mut score_history = Vec::with_capacity(config.max_generations);

        for generation in 0..config.max_generations {
            // Site representatives were scored during recruitment; only
            // the scouts are new.
            let mut population = std::mem::take(&mut sites);
            population.extend(score_all(problem, scouts, config.parallel));

            // Stable: ties keep their previous order.
            population.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

            let leader = &population[0];
            if best.as_ref().is_none_or(|b| leader.score > b.score) {
                info!(
                    generation,
                    score = ?leader.score,
                    "new best solution"
                );
                on_improvement(&Improvement {
                    generation,
                    solution: &leader.solution,
                    score: leader.score,
                });
                best = Some(leader.clone());
            }

            sites = population
                .iter()
                .take(config.num_sites)
                .enumerate()
                .map(|(i, site)| {
                    let recruits = if i < config.elite_site_count {
                        config.elite_bee_count
                    } else {
                        config.other_bee_count
                    };
                    search_patch(problem, &site.solution, recruits, patch_size, rng)
                })
                .collect();

            scouts = (0..config.population_size - config.num_sites)
                .map(|_| problem.scout(rng))
                .collect();

            if rng.random_range(0.0..1.0) < config.patch_size_decay_probability {
                patch_size = patch_size.saturating_sub(1).max(1);
            }

            let best_score = best.as_ref().map(|b| b.score);
            if let Some(score) = best_score {
                score_history.push(score);
            }
            debug!(
                generation = generation + 1,
                patch_size,
                best = ?best_score,
                "generation complete"
            );
        }

        // max_generations >= 1, so the first generation always sets a best.
        let best = best.ok_or(ConfigError::ZeroGenerations)?;

        Ok(BeesResult {
            best: best.solution,
            best_score: best.score,
            generations: config.max_generations,
            final_patch_size: patch_size,
            score_history,
        })
    }
}

/// Samples `recruits` neighbours of `site` and keeps the best one. The
/// first of equally good recruits wins.
fn search_patch<P: BeesProblem, R: Rng>(
    problem: &P,
    site: &P::Solution,
    recruits: usize,
    patch_size: usize,
    rng: &mut R,
) -> Bee<P::Solution, P::Score> {
    let first = problem.neighbor(site, patch_size, rng);
    let mut best = Bee {
        score: problem.score(&first),
        solution: first,
    };
    for _ in 1..recruits {
        let candidate = problem.neighbor(site, patch_size, rng);
        let score = problem.score(&candidate);
        if score > best.score {
            best = Bee {
                solution: candidate,
                score,
            };
        }
    }
    best
}

#[cfg(feature = "parallel")]
fn score_all<P: BeesProblem>(
    problem: &P,
    solutions: Vec<P::Solution>,
    parallel: bool,
) -> Vec<Bee<P::Solution, P::Score>> {
    use rayon::prelude::*;

    if parallel {
        solutions
            .into_par_iter()
            .map(|solution| Bee {
                score: problem.score(&solution),
                solution,
            })
            .collect()
    } else {
        score_serial(problem, solutions)
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all<P: BeesProblem>(
    problem: &P,
    solutions: Vec<P::Solution>,
    _parallel: bool,
) -> Vec<Bee<P::Solution, P::Score>> {
    score_serial(problem, solutions)
}

fn score_serial<P: BeesProblem>(
    problem: &P,
    solutions: Vec<P::Solution>,
) -> Vec<Bee<P::Solution, P::Score>> {
    solutions
        .into_iter()
        .map(|solution| Bee {
            score: problem.score(&solution),
            solution,
        })
        .collect()
}
