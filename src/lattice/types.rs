//! Lattice site types.

use std::fmt;

/// Ising spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    /// `+1.0` for up, `-1.0` for down.
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Spin::Up => 1.0,
            Spin::Down => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Spin {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }

    pub fn is_up(self) -> bool {
        self == Spin::Up
    }
}

impl From<bool> for Spin {
    /// `true` is up.
    fn from(up: bool) -> Self {
        if up {
            Spin::Up
        } else {
            Spin::Down
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spin::Up => write!(f, "+1"),
            Spin::Down => write!(f, "-1"),
        }
    }
}

/// One of the three sublattices of a triangular layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubLattice {
    A,
    B,
    C,
}

impl SubLattice {
    pub const ALL: [SubLattice; 3] = [SubLattice::A, SubLattice::B, SubLattice::C];

    /// Color of the site at `(row, col)`: `(row + col) mod 3`.
    ///
    /// Right, bottom and bottom-right neighbors always differ in color, so
    /// this is a proper 3-coloring when `L` is a multiple of 3.
    pub fn at(row: usize, col: usize) -> SubLattice {
        match (row + col) % 3 {
            0 => SubLattice::A,
            1 => SubLattice::B,
            _ => SubLattice::C,
        }
    }

    /// Position in [`SubLattice::ALL`].
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            SubLattice::A => 0,
            SubLattice::B => 1,
            SubLattice::C => 2,
        }
    }
}

impl fmt::Display for SubLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubLattice::A => "A",
            SubLattice::B => "B",
            SubLattice::C => "C",
        };
        f.write_str(name)
    }
}

/// Neighbor direction on the layered lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Right,
    Bottom,
    BottomRight,
    LayerUp,
    Left,
    UpLeft,
    Up,
    LayerDown,
}

impl Direction {
    /// Every direction, forward set first. Adjacency lookups resolve in
    /// this order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Bottom,
        Direction::BottomRight,
        Direction::LayerUp,
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::LayerDown,
    ];

    /// Directions whose bonds are stored on the node.
    pub const FORWARD: [Direction; 4] = [
        Direction::Right,
        Direction::Bottom,
        Direction::BottomRight,
        Direction::LayerUp,
    ];

    pub fn is_forward(self) -> bool {
        matches!(
            self,
            Direction::Right | Direction::Bottom | Direction::BottomRight | Direction::LayerUp
        )
    }

    pub fn is_inter_layer(self) -> bool {
        matches!(self, Direction::LayerUp | Direction::LayerDown)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Up,
            Direction::BottomRight => Direction::UpLeft,
            Direction::LayerUp => Direction::LayerDown,
            Direction::Left => Direction::Right,
            Direction::UpLeft => Direction::BottomRight,
            Direction::Up => Direction::Bottom,
            Direction::LayerDown => Direction::LayerUp,
        }
    }
}

/// A single lattice site.
///
/// Holds the forward neighbors and the strengths of the bonds to them.
/// After construction only the spin (and, through overrides, couplings)
/// change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub(crate) index: usize,
    pub(crate) right: usize,
    pub(crate) bottom: usize,
    pub(crate) bottom_right: usize,
    pub(crate) layer_up: usize,
    pub(crate) spin: Spin,
    pub(crate) sub_lattice: SubLattice,
    pub(crate) j_right: f64,
    pub(crate) j_bottom: f64,
    pub(crate) j_bottom_right: f64,
    pub(crate) j_layer_up: f64,
}

impl Node {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn sub_lattice(&self) -> SubLattice {
        self.sub_lattice
    }

    /// Index of the forward neighbor in `direction`.
    ///
    /// Returns `None` for backward directions, which are not stored.
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Right => Some(self.right),
            Direction::Bottom => Some(self.bottom),
            Direction::BottomRight => Some(self.bottom_right),
            Direction::LayerUp => Some(self.layer_up),
            _ => None,
        }
    }

    /// Strength of the forward bond in `direction`.
    pub fn coupling(&self, direction: Direction) -> Option<f64> {
        match direction {
            Direction::Right => Some(self.j_right),
            Direction::Bottom => Some(self.j_bottom),
            Direction::BottomRight => Some(self.j_bottom_right),
            Direction::LayerUp => Some(self.j_layer_up),
            _ => None,
        }
    }

    /// Replaces the strength of a forward bond. Backward directions are ignored.
    pub(crate) fn set_coupling(&mut self, direction: Direction, strength: f64) {
        match direction {
            Direction::Right => self.j_right = strength,
            Direction::Bottom => self.j_bottom = strength,
            Direction::BottomRight => self.j_bottom_right = strength,
            Direction::LayerUp => self.j_layer_up = strength,
            _ => {}
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node {}: right {} ({}), bottom {} ({}), bottom-right {} ({}), layer-up {} ({}), spin {}, sublattice {}",
            self.index,
            self.right,
            self.j_right,
            self.bottom,
            self.j_bottom,
            self.bottom_right,
            self.j_bottom_right,
            self.layer_up,
            self.j_layer_up,
            self.spin,
            self.sub_lattice,
        )
    }
}
