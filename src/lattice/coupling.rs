//! Sparse per-bond coupling overrides.
//!
//! Entries are keyed by the canonical pair `(a, b)` with `a < b`. Self
//! pairs and pairs that are not adjacent on the lattice are dropped on
//! insertion, so a built map only ever names real bonds.

use std::collections::BTreeMap;

use log::trace;

use super::config::LatticeParams;
use super::topology::Geometry;
use super::types::Direction;

/// A pruned override map: `(a, b) -> (direction from a to b, strength)`.
#[derive(Debug, Clone)]
pub struct CouplingOverrides {
    geometry: Geometry,
    entries: BTreeMap<(usize, usize), (Direction, f64)>,
}

impl CouplingOverrides {
    /// Creates an empty map for the lattice described by `params`.
    pub fn new(params: &LatticeParams) -> Self {
        Self {
            geometry: Geometry::new(params.length(), params.height()),
            entries: BTreeMap::new(),
        }
    }

    /// Records an override for the bond between `a` and `b`.
    ///
    /// Returns `false` (and records nothing) when the pair is a self pair,
    /// out of range, or not adjacent. A later insert for the same pair
    /// replaces the earlier one.
    pub fn insert(&mut self, a: usize, b: usize, strength: f64) -> bool {
        let count = self.geometry.node_count();
        if a == b || a >= count || b >= count {
            trace!("dropping coupling override ({a}, {b}): not a bond");
            return false;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        match self.geometry.direction_between(low, high) {
            Some(direction) => {
                self.entries.insert((low, high), (direction, strength));
                true
            }
            None => {
                trace!("dropping coupling override ({low}, {high}): not adjacent");
                false
            }
        }
    }

    /// Geometry the map was built for.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a canonical pair.
    pub fn get(&self, a: usize, b: usize) -> Option<(Direction, f64)> {
        let key = if a < b { (a, b) } else { (b, a) };
        self.entries.get(&key).copied()
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), (Direction, f64))> + '_ {
        self.entries.iter().map(|(&pair, &value)| (pair, value))
    }

    /// Resolves an entry to the node that stores the bond and the forward
    /// direction it is stored under.
    pub(crate) fn storage_slot(pair: (usize, usize), direction: Direction) -> (usize, Direction) {
        let (a, b) = pair;
        if direction.is_forward() {
            (a, direction)
        } else {
            (b, direction.opposite())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::LatticeConfig;

    fn params(length: usize, height: usize) -> LatticeParams {
        let gamma = if height == 1 { 0.0 } else { 0.5 };
        LatticeConfig::default()
            .with_length(length)
            .with_height(height)
            .with_gamma(gamma)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_self_pair_dropped() {
        let mut overrides = CouplingOverrides::new(&params(3, 1));
        assert!(!overrides.insert(4, 4, 2.0));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_non_adjacent_dropped() {
        let mut overrides = CouplingOverrides::new(&params(3, 1));
        assert!(!overrides.insert(0, 5, 2.0));
        assert!(!overrides.insert(0, 99, 2.0));
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_pairs_are_canonical() {
        let mut overrides = CouplingOverrides::new(&params(3, 1));
        assert!(overrides.insert(1, 0, 2.5));
        let ((a, b), (direction, strength)) = overrides.iter().next().unwrap();
        assert_eq!((a, b), (0, 1));
        assert_eq!(direction, Direction::Right);
        assert_eq!(strength, 2.5);
        assert_eq!(overrides.get(1, 0), Some((Direction::Right, 2.5)));
    }

    #[test]
    fn test_later_insert_replaces() {
        let mut overrides = CouplingOverrides::new(&params(3, 1));
        overrides.insert(0, 1, 2.0);
        overrides.insert(1, 0, 3.0);
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get(0, 1), Some((Direction::Right, 3.0)));
    }

    #[test]
    fn test_backward_direction_resolves_to_other_endpoint() {
        let mut overrides = CouplingOverrides::new(&params(3, 1));
        // 2 is left of 0 through the wrap; the bond is stored on 2 as Right
        assert!(overrides.insert(0, 2, 0.25));
        let (pair, (direction, _)) = overrides.iter().next().unwrap();
        assert_eq!(direction, Direction::Left);
        assert_eq!(
            CouplingOverrides::storage_slot(pair, direction),
            (2, Direction::Right)
        );
    }

    #[test]
    fn test_layer_bond_accepted() {
        let mut overrides = CouplingOverrides::new(&params(3, 3));
        assert!(overrides.insert(0, 9, 0.1));
        assert_eq!(overrides.get(0, 9), Some((Direction::LayerUp, 0.1)));
        // layer 0 and layer 2 are adjacent through the wrap
        assert!(overrides.insert(18, 0, 0.2));
        assert_eq!(overrides.get(0, 18), Some((Direction::LayerDown, 0.2)));
    }
}
