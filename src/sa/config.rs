//! SA configuration and temperature schedules.

use super::types::Schedule;
use crate::error::ConfigError;

/// Exponential-decay schedule: `T(t) = k * exp(-lambda * t)` for
/// `t < limit`, zero afterwards.
///
/// # Examples
///
/// ```
/// use sensor_cover::sa::{ExpSchedule, Schedule};
///
/// let schedule = ExpSchedule::new(100.0, 0.005, 2000);
/// assert_eq!(schedule.temperature(0), 100.0);
/// assert_eq!(schedule.temperature(2000), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpSchedule {
    /// Starting temperature.
    pub k: f64,
    /// Decay rate per step.
    pub lambda: f64,
    /// First step at which the temperature is zero.
    pub limit: usize,
}

impl Default for ExpSchedule {
    fn default() -> Self {
        Self {
            k: 20.0,
            lambda: 0.005,
            limit: 100,
        }
    }
}

impl ExpSchedule {
    pub fn new(k: f64, lambda: f64, limit: usize) -> Self {
        Self { k, lambda, limit }
    }
}

impl Schedule for ExpSchedule {
    fn temperature(&self, step: usize) -> f64 {
        if step < self.limit {
            self.k * (-self.lambda * step as f64).exp()
        } else {
            0.0
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.k.is_nan() || self.k <= 0.0 {
            return Err(ConfigError::ScheduleScale(self.k));
        }
        if self.lambda.is_nan() || self.lambda < 0.0 {
            return Err(ConfigError::ScheduleDecay(self.lambda));
        }
        Ok(())
    }
}

/// Configuration for the Simulated Annealing runner.
///
/// The temperature schedule is passed to the runner separately.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Hard cap on steps. 0 = stop only when the schedule reaches zero.
    pub max_steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl SaConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let s = ExpSchedule::default();
        assert!((s.k - 20.0).abs() < 1e-12);
        assert!((s.lambda - 0.005).abs() < 1e-12);
        assert_eq!(s.limit, 100);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_schedule_decays_then_zero() {
        let s = ExpSchedule::new(100.0, 0.005, 2000);
        assert!((s.temperature(0) - 100.0).abs() < 1e-12);
        assert!((s.temperature(200) - 100.0 * (-1.0f64).exp()).abs() < 1e-9);
        for t in 1..2000 {
            assert!(s.temperature(t) < s.temperature(t - 1));
            assert!(s.temperature(t) > 0.0);
        }
        assert_eq!(s.temperature(2000), 0.0);
        assert_eq!(s.temperature(5000), 0.0);
    }

    #[test]
    fn test_schedule_validation() {
        assert_eq!(
            ExpSchedule::new(0.0, 0.1, 10).validate(),
            Err(ConfigError::ScheduleScale(0.0))
        );
        assert_eq!(
            ExpSchedule::new(1.0, -0.1, 10).validate(),
            Err(ConfigError::ScheduleDecay(-0.1))
        );
        assert!(ExpSchedule::new(1.0, f64::NAN, 10).validate().is_err());
    }

    #[test]
    fn test_closure_schedule() {
        let s = |t: usize| if t < 3 { 1.0 } else { 0.0 };
        assert_eq!(s.temperature(2), 1.0);
        assert_eq!(s.temperature(3), 0.0);
        assert!(Schedule::validate(&s).is_ok());
    }

    #[test]
    fn test_config_builder() {
        let c = SaConfig::default().with_max_steps(50).with_seed(4);
        assert_eq!(c.max_steps, 50);
        assert_eq!(c.seed, Some(4));
    }
}
