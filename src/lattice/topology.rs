//! Periodic neighbor indexing for a stack of triangular layers.
//!
//! A node at `(layer, row, col)` has linear index
//! `layer * L² + row * L + col`. Each axis wraps independently.
//!
//! The forward set (right, bottom, bottom-right, layer-up) is what nodes
//! store; every bond is attached to the endpoint it leaves from. The
//! backward set (left, up-left, up, layer-down) is only needed to reach the
//! bonds that point *into* a node, and is never stored.

use super::types::Direction;

/// Lattice shape: side length `L` and layer count `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    length: usize,
    height: usize,
}

impl Geometry {
    /// Creates a geometry. Both dimensions must be non-zero.
    pub fn new(length: usize, height: usize) -> Self {
        assert!(length > 0 && height > 0, "lattice dimensions must be non-zero");
        Self { length, height }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layer_size(&self) -> usize {
        self.length * self.length
    }

    pub fn node_count(&self) -> usize {
        self.layer_size() * self.height
    }

    /// Linear index of `(layer, row, col)`.
    #[inline]
    pub fn index(&self, layer: usize, row: usize, col: usize) -> usize {
        layer * self.layer_size() + row * self.length + col
    }

    /// `(layer, row, col)` of a linear index.
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize, usize) {
        (
            index / self.layer_size(),
            (index / self.length) % self.length,
            index % self.length,
        )
    }

    #[inline]
    fn inc(value: usize, modulus: usize) -> usize {
        (value + 1) % modulus
    }

    #[inline]
    fn dec(value: usize, modulus: usize) -> usize {
        (value + modulus - 1) % modulus
    }

    #[inline]
    pub fn right(&self, index: usize) -> usize {
        let (h, i, j) = self.coords(index);
        self.index(h, i, Self::inc(j, self.length))
    }

    #[inline]
    pub fn bottom(&self, index: usize) -> usize {
        let (h, i, j) = self.coords(index);
        self.index(h, Self::inc(i, self.length), j)
    }

    #[inline]
    pub fn bottom_right(&self, index: usize) -> usize {
        let (h, i, j) = self.coords(index);
        self.index(h, Self::inc(i, self.length), Self::inc(j, self.length))
    }

    #[inline]
    pub fn layer_up(&self, index: usize) -> usize {
        let (h, i, j) = self.coords(index);
        self.index(Self::inc(h, self.height), i, j)
    }

    #[inline]
    pub fn left(&self, index: usize) -> usize {
        let (h, i, j) = self.coords(index);
        self.index(h, i, Self::dec(j, self.length))
    }

    #[inline]
    pub fn up_left(&self, index: usize) -> usize {
        let (h, i, j) = self.coords(index);
        self.index(h, Self::dec(i, self.length), Self::dec(j, self.length))
    }

    #[inline]
    pub fn up(&self, index: usize) -> usize {
        let (h, i, j) = self.coords(index);
        self.index(h, Self::dec(i, self.length), j)
    }

    #[inline]
    pub fn layer_down(&self, index: usize) -> usize {
        let (h, i, j) = self.coords(index);
        self.index(Self::dec(h, self.height), i, j)
    }

    /// Neighbor of `index` in the given direction.
    pub fn neighbor(&self, index: usize, direction: Direction) -> usize {
        match direction {
            Direction::Right => self.right(index),
            Direction::Bottom => self.bottom(index),
            Direction::BottomRight => self.bottom_right(index),
            Direction::LayerUp => self.layer_up(index),
            Direction::Left => self.left(index),
            Direction::UpLeft => self.up_left(index),
            Direction::Up => self.up(index),
            Direction::LayerDown => self.layer_down(index),
        }
    }

    /// First direction (in [`Direction::ALL`] order) in which `b` neighbors `a`.
    pub fn direction_between(&self, a: usize, b: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(a, direction) == b)
    }

    /// Whether the forward bond leaving `index` crosses a periodic boundary.
    pub fn wraps(&self, index: usize, direction: Direction) -> bool {
        let (h, i, j) = self.coords(index);
        let last = self.length - 1;
        match direction {
            Direction::Right => j == last,
            Direction::Bottom => i == last,
            Direction::BottomRight => i == last || j == last,
            Direction::LayerUp => h == self.height - 1,
            Direction::Left => j == 0,
            Direction::UpLeft => i == 0 || j == 0,
            Direction::Up => i == 0,
            Direction::LayerDown => h == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_coords_round_trip_all_nodes() {
        let g = Geometry::new(6, 3);
        for index in 0..g.node_count() {
            let (h, i, j) = g.coords(index);
            assert_eq!(g.index(h, i, j), index);
        }
    }

    #[test]
    fn test_corner_wraps() {
        // L = 6, index 35 is (0, 5, 5)
        let g = Geometry::new(6, 2);
        assert_eq!(g.right(35), 30);
        assert_eq!(g.bottom(35), 5);
        assert_eq!(g.bottom_right(35), 0);
        assert_eq!(g.layer_up(35), 71);
        assert_eq!(g.layer_up(71), 35);
        assert_eq!(g.left(0), 5);
        assert_eq!(g.up(0), 30);
        assert_eq!(g.up_left(0), 35);
        assert_eq!(g.layer_down(0), 36);
    }

    #[test]
    fn test_single_layer_points_to_itself() {
        let g = Geometry::new(3, 1);
        for index in 0..g.node_count() {
            assert_eq!(g.layer_up(index), index);
            assert_eq!(g.layer_down(index), index);
        }
    }

    #[test]
    fn test_direction_between() {
        let g = Geometry::new(3, 2);
        assert_eq!(g.direction_between(0, 1), Some(Direction::Right));
        assert_eq!(g.direction_between(0, 3), Some(Direction::Bottom));
        assert_eq!(g.direction_between(0, 4), Some(Direction::BottomRight));
        assert_eq!(g.direction_between(0, 9), Some(Direction::LayerUp));
        assert_eq!(g.direction_between(0, 2), Some(Direction::Left));
        assert_eq!(g.direction_between(0, 8), Some(Direction::UpLeft));
        assert_eq!(g.direction_between(0, 6), Some(Direction::Up));
        // (0, 1, 2) is not adjacent to (0, 0, 0) on the triangular layer
        assert_eq!(g.direction_between(0, 5), None);
    }

    #[test]
    fn test_wraps() {
        let g = Geometry::new(3, 2);
        assert!(!g.wraps(0, Direction::Right));
        assert!(g.wraps(2, Direction::Right));
        assert!(g.wraps(6, Direction::Bottom));
        assert!(g.wraps(2, Direction::BottomRight));
        assert!(!g.wraps(0, Direction::LayerUp));
        assert!(g.wraps(9, Direction::LayerUp));
    }

    fn geometry_and_index() -> impl Strategy<Value = (Geometry, usize)> {
        (1usize..=5, 1usize..=4).prop_flat_map(|(k, height)| {
            let g = Geometry::new(3 * k, height);
            (Just(g), 0..g.node_count())
        })
    }

    proptest! {
        #[test]
        fn test_forward_backward_inverse_pairs((g, index) in geometry_and_index()) {
            prop_assert_eq!(g.right(g.left(index)), index);
            prop_assert_eq!(g.left(g.right(index)), index);
            prop_assert_eq!(g.bottom(g.up(index)), index);
            prop_assert_eq!(g.up(g.bottom(index)), index);
            prop_assert_eq!(g.bottom_right(g.up_left(index)), index);
            prop_assert_eq!(g.up_left(g.bottom_right(index)), index);
            prop_assert_eq!(g.layer_up(g.layer_down(index)), index);
            prop_assert_eq!(g.layer_down(g.layer_up(index)), index);
        }

        #[test]
        fn test_opposite_direction_inverse((g, index) in geometry_and_index()) {
            for direction in Direction::ALL {
                let neighbor = g.neighbor(index, direction);
                prop_assert!(neighbor < g.node_count());
                prop_assert_eq!(g.neighbor(neighbor, direction.opposite()), index);
            }
        }

        #[test]
        fn test_in_plane_neighbors_stay_in_layer((g, index) in geometry_and_index()) {
            let layer = g.coords(index).0;
            for direction in Direction::ALL {
                if !direction.is_inter_layer() {
                    prop_assert_eq!(g.coords(g.neighbor(index, direction)).0, layer);
                }
            }
        }
    }
}
