//! Lattice configuration and validated parameters.

use crate::error::ConfigError;

/// Raw lattice configuration, as supplied by a caller.
///
/// # Examples
///
/// ```
/// use u_ising::lattice::LatticeConfig;
///
/// let params = LatticeConfig::default()
///     .with_coupling(1.0)
///     .with_gamma(0.5)
///     .with_length(6)
///     .with_height(4)
///     .validate()
///     .unwrap();
/// assert_eq!(params.node_count(), 6 * 6 * 4);
/// assert!(params.layer_coupling() > 0.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeConfig {
    /// In-plane coupling `J`.
    pub coupling: f64,

    /// Transverse field `Γ`. Zero collapses the model to one layer.
    pub gamma: f64,

    /// Side length `L` of each triangular layer. Must be a multiple of 3.
    pub length: usize,

    /// Number of layers `H` (Trotter slices).
    pub height: usize,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            coupling: 1.0,
            gamma: 0.0,
            length: 3,
            height: 1,
        }
    }
}

impl LatticeConfig {
    pub fn with_coupling(mut self, j: f64) -> Self {
        self.coupling = j;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Validates the configuration and derives the inter-layer coupling.
    pub fn validate(&self) -> Result<LatticeParams, ConfigError> {
        if !self.coupling.is_finite() || self.coupling < 0.0 {
            return Err(ConfigError::InvalidCoupling(self.coupling));
        }
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err(ConfigError::InvalidGamma(self.gamma));
        }
        if self.length == 0 || self.length % 3 != 0 {
            return Err(ConfigError::InvalidLength(self.length));
        }
        if self.height == 0 {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        if self.gamma == 0.0 && self.height != 1 {
            return Err(ConfigError::LayersWithoutField {
                height: self.height,
            });
        }
        if self.gamma != 0.0 && self.height == 1 {
            return Err(ConfigError::FieldWithoutLayers { gamma: self.gamma });
        }

        // Jl == 0 exactly when H == 1
        let jl = layer_coupling(self.gamma);
        if self.height > 1 && jl == 0.0 {
            return Err(ConfigError::VanishingLayerCoupling {
                gamma: self.gamma,
                height: self.height,
            });
        }

        Ok(LatticeParams {
            coupling: self.coupling,
            gamma: self.gamma,
            layer_coupling: jl,
            length: self.length,
            height: self.height,
        })
    }
}

/// Inter-layer coupling `Jl = -0.5 * ln(tanh(Γ))`, exactly 0 for `Γ = 0`.
pub fn layer_coupling(gamma: f64) -> f64 {
    if gamma == 0.0 {
        0.0
    } else {
        -0.5 * gamma.tanh().ln()
    }
}

/// Validated, immutable lattice parameters.
///
/// Only obtainable through [`LatticeConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LatticeParams {
    coupling: f64,
    gamma: f64,
    layer_coupling: f64,
    length: usize,
    height: usize,
}

impl LatticeParams {
    /// In-plane coupling `J`.
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Transverse field `Γ`.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Derived inter-layer coupling `Jl`.
    pub fn layer_coupling(&self) -> f64 {
        self.layer_coupling
    }

    /// Side length `L`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Layer count `H`.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Nodes per layer, `L²`.
    pub fn layer_size(&self) -> usize {
        self.length * self.length
    }

    /// Total nodes, `L² · H`.
    pub fn node_count(&self) -> usize {
        self.layer_size() * self.height
    }
}
