//! Layered triangular lattice.
//!
//! `H` stacked `L × L` triangular layers with periodic boundaries on every
//! axis. In-plane bonds carry the coupling `J`; bonds between consecutive
//! layers carry `Jl = -0.5 ln(tanh Γ)`, the Suzuki–Trotter image of a
//! transverse field `Γ`.
//!
//! # References
//!
//! - Suzuki (1976), "Relationship between d-Dimensional Quantal Spin Systems
//!   and (d+1)-Dimensional Ising Systems"
//! - Wannier (1950), "Antiferromagnetism. The Triangular Ising Net"

mod config;
mod coupling;
mod model;
mod order;
mod topology;
mod types;

pub use config::{layer_coupling, LatticeConfig, LatticeParams};
pub use coupling::CouplingOverrides;
pub use model::{Bond, Lattice};
pub use order::{clock_phi, LayerOrder, SublatticeMeasure};
pub use topology::Geometry;
pub use types::{Direction, Node, Spin, SubLattice};
