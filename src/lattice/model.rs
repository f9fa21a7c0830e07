//! The layered triangular lattice and its Hamiltonian.
//!
//! # Energy
//!
//! ```text
//! E = Σ_i [ J_r s_i s_r + J_b s_i s_b + J_br s_i s_br − J_l s_i s_l ]
//! ```
//!
//! summed over the forward bonds of every node, so each bond is counted
//! once. The inter-layer term enters with the opposite sign.

use log::debug;
use rand::Rng;

use super::config::LatticeParams;
use super::coupling::CouplingOverrides;
use super::topology::Geometry;
use super::types::{Direction, Node, Spin, SubLattice};
use crate::error::ConfigError;

/// One stored bond, as reported by [`Lattice::bonds`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bond {
    /// Node the bond is stored on.
    pub from: usize,
    /// Forward neighbor.
    pub to: usize,
    pub direction: Direction,
    pub strength: f64,
}

/// Owns every node of the lattice together with its parameters.
#[derive(Debug, Clone)]
pub struct Lattice {
    params: LatticeParams,
    geometry: Geometry,
    nodes: Vec<Node>,
}

impl Lattice {
    /// Builds the lattice with every spin up and default couplings.
    pub fn new(params: LatticeParams) -> Self {
        let geometry = Geometry::new(params.length(), params.height());
        let j = params.coupling();
        let jl = params.layer_coupling();

        let mut nodes = Vec::with_capacity(geometry.node_count());
        for layer in 0..geometry.height() {
            for row in 0..geometry.length() {
                for col in 0..geometry.length() {
                    let index = geometry.index(layer, row, col);
                    nodes.push(Node {
                        index,
                        right: geometry.right(index),
                        bottom: geometry.bottom(index),
                        bottom_right: geometry.bottom_right(index),
                        layer_up: geometry.layer_up(index),
                        spin: Spin::Up,
                        sub_lattice: SubLattice::at(row, col),
                        j_right: j,
                        j_bottom: j,
                        j_bottom_right: j,
                        j_layer_up: jl,
                    });
                }
            }
        }

        debug!(
            "built lattice L={} H={} ({} nodes), J={}, Jl={}",
            geometry.length(),
            geometry.height(),
            nodes.len(),
            j,
            jl
        );

        Self {
            params,
            geometry,
            nodes,
        }
    }

    /// Builds the lattice and applies coupling overrides.
    pub fn with_overrides(
        params: LatticeParams,
        overrides: &CouplingOverrides,
    ) -> Result<Self, ConfigError> {
        let mut lattice = Self::new(params);
        lattice.apply_overrides(overrides)?;
        Ok(lattice)
    }

    /// Replaces the strength of every bond named in `overrides`.
    pub fn apply_overrides(&mut self, overrides: &CouplingOverrides) -> Result<(), ConfigError> {
        let found = overrides.geometry();
        if found != self.geometry {
            return Err(ConfigError::GeometryMismatch {
                expected: (self.geometry.length(), self.geometry.height()),
                found: (found.length(), found.height()),
            });
        }
        for (pair, (direction, strength)) in overrides.iter() {
            let (owner, slot) = CouplingOverrides::storage_slot(pair, direction);
            self.nodes[owner].set_coupling(slot, strength);
        }
        debug!("applied {} coupling overrides", overrides.len());
        Ok(())
    }

    /// Draws every in-plane bond strength uniformly from `[0, max)`,
    /// rounded to two decimals. Inter-layer couplings are untouched.
    pub fn randomize_couplings<R: Rng>(&mut self, rng: &mut R, max: f64) -> Result<(), ConfigError> {
        if !max.is_finite() || max <= 0.0 {
            return Err(ConfigError::InvalidCouplingRange(max));
        }
        let mut draw = || (rng.random_range(0.0..max) * 100.0).round() / 100.0;
        for node in &mut self.nodes {
            node.j_right = draw();
            node.j_bottom = draw();
            node.j_bottom_right = draw();
        }
        Ok(())
    }

    pub fn params(&self) -> &LatticeParams {
        &self.params
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn spin(&self, index: usize) -> Spin {
        self.nodes[index].spin
    }

    #[inline]
    fn s(&self, index: usize) -> f64 {
        self.nodes[index].spin.value()
    }

    pub fn set_spin(&mut self, index: usize, spin: Spin) {
        self.nodes[index].spin = spin;
    }

    /// Flips one spin in place.
    #[inline]
    pub fn flip(&mut self, index: usize) {
        let node = &mut self.nodes[index];
        node.spin = node.spin.flipped();
    }

    /// Loads a full configuration, `true` meaning up.
    pub fn set_spins(&mut self, configuration: &[bool]) -> Result<(), ConfigError> {
        if configuration.len() != self.nodes.len() {
            return Err(ConfigError::ConfigurationLength {
                expected: self.nodes.len(),
                found: configuration.len(),
            });
        }
        for (node, &up) in self.nodes.iter_mut().zip(configuration) {
            node.spin = Spin::from(up);
        }
        Ok(())
    }

    /// Current configuration, `true` meaning up.
    pub fn configuration(&self) -> Vec<bool> {
        self.nodes.iter().map(|node| node.spin.is_up()).collect()
    }

    /// Full Hamiltonian over the forward bonds of every node.
    pub fn energy(&self) -> f64 {
        self.nodes
            .iter()
            .map(|node| {
                let s = node.spin.value();
                node.j_right * s * self.s(node.right)
                    + node.j_bottom * s * self.s(node.bottom)
                    + node.j_bottom_right * s * self.s(node.bottom_right)
                    - node.j_layer_up * s * self.s(node.layer_up)
            })
            .sum()
    }

    /// Energy change from flipping each of `indices`, without flipping.
    ///
    /// Each index is evaluated against the current configuration on its
    /// own. Cross terms between flipped nodes that are neighbors of each
    /// other are not modeled, so the result is exact only when no two
    /// indices are adjacent.
    pub fn energy_delta(&self, indices: &[usize]) -> f64 {
        let removed: f64 = indices.iter().map(|&index| self.removed_energy(index)).sum();
        2.0 * removed
    }

    /// Energy change from flipping a single node.
    #[inline]
    pub fn flip_delta(&self, index: usize) -> f64 {
        2.0 * self.removed_energy(index)
    }

    /// Negated contribution of every bond touching `index`.
    ///
    /// Outgoing bonds use the node's own couplings; incoming bonds use the
    /// coupling stored on the backward neighbor.
    fn removed_energy(&self, index: usize) -> f64 {
        let node = &self.nodes[index];
        let s = node.spin.value();
        let mut sum = 0.0;

        sum -= node.j_right * s * self.s(node.right);
        sum -= node.j_bottom_right * s * self.s(node.bottom_right);
        sum -= node.j_bottom * s * self.s(node.bottom);
        sum += node.j_layer_up * s * self.s(node.layer_up);

        let left = self.geometry.left(index);
        let up_left = self.geometry.up_left(index);
        let up = self.geometry.up(index);
        let layer_down = self.geometry.layer_down(index);

        sum -= self.nodes[left].j_right * s * self.s(left);
        sum -= self.nodes[up_left].j_bottom_right * s * self.s(up_left);
        sum -= self.nodes[up].j_bottom * s * self.s(up);
        sum += self.nodes[layer_down].j_layer_up * s * self.s(layer_down);

        sum
    }

    /// `(index, spin)` for every node.
    pub fn spins(&self) -> Vec<(usize, Spin)> {
        self.nodes.iter().map(|node| (node.index, node.spin)).collect()
    }

    /// Every stored bond, four per node, in node order.
    pub fn bonds(&self) -> Vec<Bond> {
        let mut bonds = Vec::with_capacity(self.nodes.len() * Direction::FORWARD.len());
        for node in &self.nodes {
            for direction in Direction::FORWARD {
                if let (Some(to), Some(strength)) = (node.neighbor(direction), node.coupling(direction)) {
                    bonds.push(Bond {
                        from: node.index,
                        to,
                        direction,
                        strength,
                    });
                }
            }
        }
        bonds
    }

    /// Sublattice colors of one layer, row by row.
    pub fn layer_map(&self, layer: usize) -> Vec<Vec<SubLattice>> {
        let length = self.geometry.length();
        let start = layer * self.geometry.layer_size();
        self.nodes[start..start + self.geometry.layer_size()]
            .chunks(length)
            .map(|row| row.iter().map(|node| node.sub_lattice).collect())
            .collect()
    }
}
