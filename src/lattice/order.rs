//! Three-sublattice clock order parameter.
//!
//! For each layer, the per-sublattice values `m_A, m_B, m_C` are combined as
//!
//! ```text
//! Φ = (m_A + m_B e^{i4π/3} + m_C e^{-i4π/3}) / √3
//! ```
//!
//! and `|Φ|²` is averaged across layers.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::model::Lattice;
use super::types::SubLattice;

/// `|Φ|²` below which the phase of `Φ` carries no information.
const PHASE_EPSILON: f64 = 1e-12;

/// What is measured on each sublattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SublatticeMeasure {
    /// Fraction of up spins, in `[0, 1]`.
    #[default]
    UpFraction,
    /// Mean spin, in `[-1, 1]`.
    Magnetization,
}

/// Order parameter of a single layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayerOrder {
    pub layer: usize,
    /// `[m_A, m_B, m_C]`.
    pub sublattice: [f64; 3],
    pub phi: Complex64,
    /// `Re(Φ)² + Im(Φ)²`.
    pub length_squared: f64,
    /// `Re(Φ⁶) / |Φ⁶|`; `None` when `Φ` vanishes.
    pub c6: Option<f64>,
}

/// Combines three sublattice values into `Φ`.
pub fn clock_phi(m: [f64; 3]) -> Complex64 {
    let omega = Complex64::from_polar(1.0, 4.0 * PI / 3.0);
    (Complex64::new(m[0], 0.0) + omega * m[1] + omega.conj() * m[2]) / 3f64.sqrt()
}

impl LayerOrder {
    /// Builds the layer summary from its sublattice values.
    pub fn from_sublattice(layer: usize, sublattice: [f64; 3]) -> Self {
        let phi = clock_phi(sublattice);
        let length_squared = phi.re * phi.re + phi.im * phi.im;
        let c6 = if length_squared < PHASE_EPSILON {
            None
        } else {
            let phi6 = phi.powi(6);
            Some(phi6.re / phi6.norm())
        };
        Self {
            layer,
            sublattice,
            phi,
            length_squared,
            c6,
        }
    }
}

impl Lattice {
    /// Per-layer clock order for the chosen measure.
    ///
    /// Each sublattice value is normalized by `L²/3`.
    pub fn layer_orders(&self, measure: SublatticeMeasure) -> Vec<LayerOrder> {
        let geometry = self.geometry();
        let layer_size = geometry.layer_size();
        let per_color = (layer_size / 3) as f64;

        self.nodes()
            .chunks(layer_size)
            .enumerate()
            .map(|(layer, nodes)| {
                let mut totals = [0.0; 3];
                for node in nodes {
                    let slot = node.sub_lattice().slot();
                    totals[slot] += match measure {
                        SublatticeMeasure::UpFraction => {
                            if node.spin().is_up() {
                                1.0
                            } else {
                                0.0
                            }
                        }
                        SublatticeMeasure::Magnetization => node.spin().value(),
                    };
                }
                LayerOrder::from_sublattice(layer, totals.map(|total| total / per_color))
            })
            .collect()
    }

    /// Mean over layers of `|Φ|²`, using up-spin fractions.
    pub fn order_parameter_length_squared(&self) -> f64 {
        self.mean_length_squared(SublatticeMeasure::UpFraction)
    }

    /// Mean over layers of `|Φ|²` for any measure.
    pub fn mean_length_squared(&self, measure: SublatticeMeasure) -> f64 {
        let orders = self.layer_orders(measure);
        orders.iter().map(|order| order.length_squared).sum::<f64>() / orders.len() as f64
    }

    /// Sublattice of `index`.
    pub fn sub_lattice(&self, index: usize) -> SubLattice {
        self.node(index).sub_lattice()
    }
}
