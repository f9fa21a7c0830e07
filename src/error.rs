//! Configuration errors.

/// A parameter set rejected before any lattice or run is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("coupling must be finite and non-negative, got {0}")]
    InvalidCoupling(f64),

    #[error("gamma must be finite and non-negative, got {0}")]
    InvalidGamma(f64),

    #[error("length must be a positive multiple of 3, got {0}")]
    InvalidLength(usize),

    #[error("height must be at least 1, got {0}")]
    InvalidHeight(usize),

    /// `Γ = 0` with more than one layer.
    #[error("when gamma is 0, height must be 1 (got {height})")]
    LayersWithoutField { height: usize },

    /// A single layer with `Γ ≠ 0`.
    #[error("when height is 1, gamma must be 0 (got {gamma})")]
    FieldWithoutLayers { gamma: f64 },

    /// `Γ` so large that `tanh Γ` rounds to 1 and `Jl` vanishes while
    /// `H > 1`.
    #[error("gamma {gamma} gives zero inter-layer coupling with height {height}")]
    VanishingLayerCoupling { gamma: f64, height: usize },

    #[error("initial temperature must be finite and positive, got {0}")]
    InvalidTemperature(f64),

    #[error("geometric alpha must be in (0, 1), got {0}")]
    InvalidCoolingFactor(f64),

    /// The schedule reaches `T = 0` before the last sweep.
    #[error("temperature underflows to {temperature} at sweep {step}")]
    TemperatureUnderflow { step: usize, temperature: f64 },

    #[error("random coupling bound must be finite and positive, got {0}")]
    InvalidCouplingRange(f64),

    /// `(length, height)` of the lattice and of the override map.
    #[error(
        "overrides built for length {} height {}, lattice is length {} height {}",
        .found.0, .found.1, .expected.0, .expected.1
    )]
    GeometryMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("configuration has {found} spins, expected {expected}")]
    ConfigurationLength { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_height_messages_name_the_violated_side() {
        let zero_gamma = ConfigError::LayersWithoutField { height: 2 };
        assert!(zero_gamma.to_string().contains("height must be 1"));

        let one_layer = ConfigError::FieldWithoutLayers { gamma: 0.5 };
        assert!(one_layer.to_string().contains("gamma must be 0"));
    }

    #[test]
    fn test_geometry_mismatch_message() {
        let err = ConfigError::GeometryMismatch {
            expected: (3, 1),
            found: (6, 2),
        };
        assert_eq!(
            err.to_string(),
            "overrides built for length 6 height 2, lattice is length 3 height 1"
        );
    }
}
