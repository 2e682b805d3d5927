//! Bees Algorithm configuration.

use crate::error::ConfigError;

/// Configuration for the Bees Algorithm.
///
/// The defaults reproduce the classic sensor-placement run: 45 bees,
/// 3 sites of which 1 is elite, 7 and 2 recruits, patch size 3 with a
/// 5% chance per generation to shrink.
///
/// # Examples
///
/// ```
/// use sensor_cover::bees::BeesConfig;
///
/// let config = BeesConfig::default()
///     .with_max_generations(50)
///     .with_population_size(30)
///     .with_sites(4, 2)
///     .with_recruits(8, 3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeesConfig {
    /// Number of generations to run.
    pub max_generations: usize,

    /// Bees per generation: sites plus scouts.
    pub population_size: usize,

    /// Top-ranked solutions exploited each generation.
    pub num_sites: usize,

    /// How many of the sites are elite and get `elite_bee_count` recruits.
    pub elite_site_count: usize,

    /// Components perturbed per neighbour sample.
    pub patch_size: usize,

    /// Per-generation probability of shrinking the patch by one.
    ///
    /// The patch never shrinks below 1.
    pub patch_size_decay_probability: f64,

    /// Neighbour samples drawn around an elite site.
    pub elite_bee_count: usize,

    /// Neighbour samples drawn around a non-elite site.
    pub other_bee_count: usize,

    /// Score each generation's scouts in parallel (requires the
    /// `parallel` feature; ignored otherwise).
    pub parallel: bool,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for BeesConfig {
    fn default() -> Self {
        Self {
            max_generations: 20,
            population_size: 45,
            num_sites: 3,
            elite_site_count: 1,
            patch_size: 3,
            patch_size_decay_probability: 0.05,
            elite_bee_count: 7,
            other_bee_count: 2,
            parallel: false,
            seed: None,
        }
    }
}

impl BeesConfig {
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of sites and how many of them are elite.
    pub fn with_sites(mut self, num_sites: usize, elite_site_count: usize) -> Self {
        self.num_sites = num_sites;
        self.elite_site_count = elite_site_count;
        self
    }

    pub fn with_patch_size(mut self, n: usize) -> Self {
        self.patch_size = n;
        self
    }

    pub fn with_patch_size_decay_probability(mut self, p: f64) -> Self {
        self.patch_size_decay_probability = p;
        self
    }

    /// Sets neighbour sample counts for elite and non-elite sites.
    pub fn with_recruits(mut self, elite_bee_count: usize, other_bee_count: usize) -> Self {
        self.elite_bee_count = elite_bee_count;
        self.other_bee_count = other_bee_count;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the problem-independent parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.num_sites == 0 {
            return Err(ConfigError::ZeroSites);
        }
        if self.num_sites > self.population_size {
            return Err(ConfigError::SitesExceedPopulation {
                sites: self.num_sites,
                population: self.population_size,
            });
        }
        if self.elite_site_count > self.num_sites {
            return Err(ConfigError::EliteExceedSites {
                elite: self.elite_site_count,
                sites: self.num_sites,
            });
        }
        if self.elite_bee_count == 0 || self.other_bee_count == 0 {
            return Err(ConfigError::ZeroBees);
        }
        if !(0.0..=1.0).contains(&self.patch_size_decay_probability) {
            return Err(ConfigError::DecayProbability(
                self.patch_size_decay_probability,
            ));
        }
        if self.patch_size == 0 {
            return Err(ConfigError::ZeroPatchSize);
        }
        Ok(())
    }

    /// Validates everything, including `patch_size` against the number of
    /// perturbable components of a concrete problem.
    pub fn validate_for(&self, dimension: usize) -> Result<(), ConfigError> {
        self.validate()?;
        if self.patch_size > dimension {
            return Err(ConfigError::PatchSize {
                patch_size: self.patch_size,
                sensors: dimension,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BeesConfig::default();
        assert_eq!(config.max_generations, 20);
        assert_eq!(config.population_size, 45);
        assert_eq!(config.num_sites, 3);
        assert_eq!(config.elite_site_count, 1);
        assert_eq!(config.patch_size, 3);
        assert!((config.patch_size_decay_probability - 0.05).abs() < 1e-12);
        assert_eq!(config.elite_bee_count, 7);
        assert_eq!(config.other_bee_count, 2);
        assert!(config.seed.is_none());
        assert!(config.validate_for(4).is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BeesConfig::default()
            .with_max_generations(5)
            .with_population_size(10)
            .with_sites(4, 2)
            .with_patch_size(2)
            .with_patch_size_decay_probability(0.5)
            .with_recruits(6, 1)
            .with_parallel(true)
            .with_seed(9);
        assert_eq!(config.max_generations, 5);
        assert_eq!(config.population_size, 10);
        assert_eq!(config.num_sites, 4);
        assert_eq!(config.elite_site_count, 2);
        assert_eq!(config.patch_size, 2);
        assert_eq!(config.elite_bee_count, 6);
        assert_eq!(config.other_bee_count, 1);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = BeesConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGenerations));
    }

    #[test]
    fn test_validate_sites_exceed_population() {
        let config = BeesConfig::default().with_population_size(2).with_sites(3, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SitesExceedPopulation {
                sites: 3,
                population: 2
            })
        );
    }

    #[test]
    fn test_sites_equal_population_ok() {
        let config = BeesConfig::default().with_population_size(3).with_sites(3, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_elite_exceed_sites() {
        let config = BeesConfig::default().with_sites(2, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EliteExceedSites { .. })
        ));
    }

    #[test]
    fn test_validate_zero_recruits() {
        let config = BeesConfig::default().with_recruits(3, 0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBees));
    }

    #[test]
    fn test_validate_decay_probability() {
        let config = BeesConfig::default().with_patch_size_decay_probability(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DecayProbability(_))
        ));
    }

    #[test]
    fn test_validate_patch_size_against_dimension() {
        let config = BeesConfig::default().with_patch_size(5);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.validate_for(4),
            Err(ConfigError::PatchSize {
                patch_size: 5,
                sensors: 4
            })
        );
        assert!(BeesConfig::default()
            .with_patch_size(0)
            .validate_for(4)
            .is_err());
    }
}
