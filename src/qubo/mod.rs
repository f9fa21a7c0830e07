//! QUBO export.
//!
//! Rewrites the lattice Hamiltonian over binary variables `x ∈ {0, 1}`
//! (`x = 1` for spin up) so it can be handed to an external binary
//! optimizer. Evaluating the periodic export on a configuration gives the
//! same value as [`Lattice::energy`](crate::lattice::Lattice::energy).

mod polynomial;
mod types;

pub use polynomial::BinaryPolynomial;
pub use types::{Boundary, Term};
