//! Annealing configuration and cooling schedules.

use crate::error::ConfigError;

/// Temperature at sweep `t` of a run with `τ` sweeps.
///
/// Every schedule stays strictly positive for `t < τ`, so the Metropolis
/// ratio never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Linear cooling: `T(t) = T0 · (1 - t/τ)`.
    ///
    /// Reaches `T0/τ` on the last sweep; `T(τ)` is never evaluated.
    #[default]
    Linear,

    /// Geometric cooling: `T(t) = T0 · alpha^t`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
}

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use u_ising::anneal::{AnnealConfig, CoolingSchedule};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(5.0)
///     .with_steps(200)
///     .with_cooling(CoolingSchedule::Linear)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature `T0`.
    pub initial_temperature: f64,

    /// Number of sweeps `τ`. Zero leaves the lattice untouched.
    pub steps: usize,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            steps: 100,
            cooling: CoolingSchedule::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::InvalidTemperature(self.initial_temperature));
        }
        if let CoolingSchedule::Geometric { alpha } = self.cooling {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(ConfigError::InvalidCoolingFactor(alpha));
            }
        }
        // both schedules are non-increasing, so the last sweep is the coldest
        if let Some(last) = self.steps.checked_sub(1) {
            let temperature = self.temperature_at(last);
            if !(temperature > 0.0) {
                return Err(ConfigError::TemperatureUnderflow {
                    step: last,
                    temperature,
                });
            }
        }
        Ok(())
    }

    /// Temperature of sweep `step`. Only meaningful for `step < steps`.
    pub fn temperature_at(&self, step: usize) -> f64 {
        match self.cooling {
            CoolingSchedule::Linear => {
                self.initial_temperature * (1.0 - step as f64 / self.steps as f64)
            }
            CoolingSchedule::Geometric { alpha } => {
                self.initial_temperature * alpha.powf(step as f64)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 10.0).abs() < 1e-12);
        assert_eq!(config.steps, 100);
        assert_eq!(config.cooling, CoolingSchedule::Linear);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        for t in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let config = AnnealConfig::default().with_initial_temperature(t);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidTemperature(_))
            ));
        }
    }

    #[test]
    fn test_validate_bad_alpha() {
        for alpha in [0.0, 1.0, 1.5, -0.2] {
            let config =
                AnnealConfig::default().with_cooling(CoolingSchedule::Geometric { alpha });
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidCoolingFactor(alpha))
            );
        }
    }

    #[test]
    fn test_linear_schedule() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_steps(4);
        let temps: Vec<f64> = (0..4).map(|t| config.temperature_at(t)).collect();
        assert_eq!(temps, vec![10.0, 7.5, 5.0, 2.5]);
    }

    #[test]
    fn test_validate_geometric_underflow() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_steps(400)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.1 });
        assert_eq!(config.temperature_at(399), 0.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TemperatureUnderflow {
                step: 399,
                temperature: 0.0
            })
        );

        // the same factor over fewer sweeps stays representable
        assert!(config.with_steps(300).validate().is_ok());
    }

    #[test]
    fn test_geometric_exponent_not_truncated() {
        let config = AnnealConfig::default()
            .with_initial_temperature(1.0)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.5 });
        // 2^32 would wrap to 0 as an i32 exponent and give T0 back
        let step = 1usize << 32;
        assert!(config.temperature_at(step) < 1.0);
    }

    #[test]
    fn test_schedules_stay_positive() {
        let linear = AnnealConfig::default().with_steps(1000);
        let geometric = AnnealConfig::default()
            .with_steps(1000)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.99 });
        for t in 0..1000 {
            assert!(linear.temperature_at(t) > 0.0);
            assert!(geometric.temperature_at(t) > 0.0);
        }
    }
}
