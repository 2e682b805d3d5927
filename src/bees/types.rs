//! Core trait for the Bees Algorithm.

use rand::Rng;
use std::fmt::Debug;

/// Defines a maximization problem for the Bees Algorithm.
///
/// The user implements scouting (random solutions), scoring, and
/// neighbourhood sampling around a site. The runner handles ranking,
/// site selection, recruitment and patch shrinking.
///
/// # Maximization
///
/// Unlike the cost-based runners in this crate, higher scores are better.
///
/// # Examples
///
/// ```ignore
/// struct OneMax { n: usize }
///
/// impl BeesProblem for OneMax {
///     type Solution = Vec<bool>;
///     type Score = usize;
///
///     fn scout<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         (0..self.n).map(|_| rng.random_bool(0.5)).collect()
///     }
///
///     fn score(&self, bits: &Vec<bool>) -> usize {
///         bits.iter().filter(|&&b| b).count()
///     }
///
///     fn neighbor<R: Rng>(&self, site: &Vec<bool>, patch_size: usize, rng: &mut R) -> Vec<bool> {
///         let mut bits = site.clone();
///         for i in rand::seq::index::sample(rng, self.n, patch_size) {
///             bits[i] = !bits[i];
///         }
///         bits
///     }
///
///     fn dimension(&self) -> usize { self.n }
/// }
/// ```
///
/// # References
///
/// Pham et al. (2005), "The Bees Algorithm"
pub trait BeesProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send + Sync;

    /// The score type. Higher is better.
    type Score: PartialOrd + Copy + Send + Sync + Debug;

    /// Creates a uniformly random solution (a scout).
    fn scout<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Scores a solution.
    fn score(&self, solution: &Self::Solution) -> Self::Score;

    /// Samples one solution in the patch around `site`.
    ///
    /// `patch_size` is the number of distinct components to perturb, all
    /// relative to `site` itself. It is always in `[1, dimension()]`.
    fn neighbor<R: Rng>(
        &self,
        site: &Self::Solution,
        patch_size: usize,
        rng: &mut R,
    ) -> Self::Solution;

    /// Number of independently perturbable components. Upper bound for
    /// the patch size.
    fn dimension(&self) -> usize;
}
