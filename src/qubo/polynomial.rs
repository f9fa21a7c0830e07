//! Hamiltonian to binary polynomial.
//!
//! With `s = 2x - 1`, a bond of strength `k` between `i` and `j` becomes
//!
//! ```text
//! k s_i s_j = 4k x_i x_j - 2k x_i - 2k x_j + k
//! ```
//!
//! In-plane bonds enter with `+k`, inter-layer bonds with `-k`, matching
//! the sign convention of [`Lattice::energy`].

use std::collections::BTreeMap;

use log::debug;

use super::types::{Boundary, Term};
use crate::error::ConfigError;
use crate::lattice::{Direction, Lattice};

/// A merged binary polynomial plus constant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryPolynomial {
    /// Non-constant terms, sorted by variable list.
    pub terms: Vec<Term>,
    pub constant: f64,
    /// Number of binary variables, one per lattice node.
    pub variable_count: usize,
}

impl BinaryPolynomial {
    /// Exports the lattice Hamiltonian.
    ///
    /// Single-layer lattices export no inter-layer terms.
    pub fn from_lattice(lattice: &Lattice, boundary: Boundary) -> Self {
        let geometry = lattice.geometry();
        let layered = geometry.height() > 1;
        let mut merged: BTreeMap<Vec<usize>, f64> = BTreeMap::new();
        let mut constant = 0.0;

        for bond in lattice.bonds() {
            if bond.direction == Direction::LayerUp && !layered {
                continue;
            }
            if boundary == Boundary::Open && geometry.wraps(bond.from, bond.direction) {
                continue;
            }

            let k = if bond.direction.is_inter_layer() {
                -bond.strength
            } else {
                bond.strength
            };
            let mut pair = vec![bond.from, bond.to];
            pair.sort_unstable();

            *merged.entry(pair).or_insert(0.0) += 4.0 * k;
            *merged.entry(vec![bond.from]).or_insert(0.0) -= 2.0 * k;
            *merged.entry(vec![bond.to]).or_insert(0.0) -= 2.0 * k;
            constant += k;
        }

        let terms: Vec<Term> = merged
            .into_iter()
            .map(|(variables, coefficient)| Term {
                coefficient,
                variables,
            })
            .collect();

        debug!(
            "exported {} terms over {} variables ({:?} boundary)",
            terms.len(),
            lattice.len(),
            boundary
        );

        Self {
            terms,
            constant,
            variable_count: lattice.len(),
        }
    }

    /// Value on a binary configuration (`true` = 1 = spin up).
    ///
    /// The configuration must hold exactly one entry per variable.
    pub fn evaluate(&self, configuration: &[bool]) -> Result<f64, ConfigError> {
        if configuration.len() != self.variable_count {
            return Err(ConfigError::ConfigurationLength {
                expected: self.variable_count,
                found: configuration.len(),
            });
        }
        Ok(self.constant
            + self
                .terms
                .iter()
                .map(|term| term.evaluate(configuration))
                .sum::<f64>())
    }

    /// Number of non-constant terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{CouplingOverrides, LatticeConfig};
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    fn lattice(length: usize, height: usize) -> Lattice {
        let gamma = if height == 1 { 0.0 } else { 0.7 };
        Lattice::new(
            LatticeConfig::default()
                .with_length(length)
                .with_height(height)
                .with_gamma(gamma)
                .validate()
                .unwrap(),
        )
    }

    #[test]
    fn test_single_layer_shape() {
        let lattice = lattice(3, 1);
        let poly = BinaryPolynomial::from_lattice(&lattice, Boundary::Periodic);
        // 27 distinct pair terms + 9 linear terms
        assert_eq!(poly.len(), 36);
        assert!((poly.constant - 27.0).abs() < 1e-12);
        for term in &poly.terms {
            match term.variables.len() {
                2 => assert!((term.coefficient - 4.0).abs() < 1e-12),
                1 => assert!((term.coefficient + 12.0).abs() < 1e-12),
                n => panic!("unexpected term of degree {n}"),
            }
        }
    }

    #[test]
    fn test_terms_sorted_and_canonical() {
        let lattice = lattice(3, 2);
        let poly = BinaryPolynomial::from_lattice(&lattice, Boundary::Periodic);
        for window in poly.terms.windows(2) {
            assert!(window[0].variables < window[1].variables);
        }
        for term in &poly.terms {
            assert!(term.variables.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_open_boundary_drops_wraps() {
        let lattice = lattice(3, 1);
        let poly = BinaryPolynomial::from_lattice(&lattice, Boundary::Open);
        // 6 right + 6 bottom + 4 bottom-right interior bonds
        let pairs = poly.terms.iter().filter(|t| t.variables.len() == 2).count();
        assert_eq!(pairs, 16);
        assert!((poly.constant - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_down_is_constant() {
        let lattice = lattice(6, 2);
        let poly = BinaryPolynomial::from_lattice(&lattice, Boundary::Periodic);
        let zeros = vec![false; lattice.len()];
        assert_eq!(poly.evaluate(&zeros), Ok(poly.constant));
    }

    #[test]
    fn test_evaluate_rejects_wrong_length() {
        let lattice = lattice(3, 1);
        let poly = BinaryPolynomial::from_lattice(&lattice, Boundary::Periodic);
        assert_eq!(poly.variable_count, 9);
        assert_eq!(
            poly.evaluate(&[true; 4]),
            Err(ConfigError::ConfigurationLength {
                expected: 9,
                found: 4
            })
        );
        assert!(poly.evaluate(&[false; 10]).is_err());
    }

    fn random_configuration(len: usize, seed: u64) -> Vec<bool> {
        let mut rng = create_rng(seed);
        (0..len).map(|_| rng.random()).collect()
    }

    proptest! {
        #[test]
        fn test_periodic_export_matches_energy(
            k in 1usize..=2,
            height in 1usize..=3,
            seed in any::<u64>(),
        ) {
            let mut lattice = lattice(3 * k, height);
            let mut overrides = CouplingOverrides::new(lattice.params());
            overrides.insert(0, 1, 2.5);
            overrides.insert(0, lattice.geometry().layer_up(0), 0.3);
            lattice.apply_overrides(&overrides).unwrap();

            let configuration = random_configuration(lattice.len(), seed);
            lattice.set_spins(&configuration).unwrap();

            let poly = BinaryPolynomial::from_lattice(&lattice, Boundary::Periodic);
            let value = poly.evaluate(&configuration).unwrap();
            prop_assert!((value - lattice.energy()).abs() < 1e-9);
        }
    }
}
