//! Layered triangular-lattice Ising model with simulated annealing.
//!
//! Provides:
//!
//! - **Lattice**: `H` stacked `L × L` triangular layers with periodic
//!   boundaries, an in-plane coupling `J` and an inter-layer coupling
//!   derived from a transverse field `Γ`. Full Hamiltonian energy,
//!   incremental single-flip energy differences, and sparse per-bond
//!   coupling overrides.
//! - **Order parameters**: the 3-sublattice clock order parameter `|Φ|²`
//!   averaged over layers, with per-layer `Φ` and `c6` diagnostics.
//! - **Annealing**: sequential single-spin-flip Metropolis sweeps under a
//!   deterministic cooling schedule.
//! - **QUBO export**: the Hamiltonian as a binary polynomial.
//!
//! # Example
//!
//! ```
//! use u_ising::anneal::{AnnealConfig, AnnealRunner};
//! use u_ising::lattice::{Lattice, LatticeConfig};
//!
//! let params = LatticeConfig::default()
//!     .with_coupling(1.0)
//!     .with_length(6)
//!     .validate()
//!     .unwrap();
//! let mut lattice = Lattice::new(params);
//! let config = AnnealConfig::default()
//!     .with_initial_temperature(10.0)
//!     .with_steps(100)
//!     .with_seed(42);
//! let result = AnnealRunner::run(&mut lattice, &config).unwrap();
//! assert!(result.final_energy < result.initial_energy);
//! let order = lattice.order_parameter_length_squared();
//! assert!((0.0..=1.0).contains(&order));
//! ```

pub mod anneal;
pub mod error;
pub mod lattice;
pub mod qubo;
pub mod random;

pub use error::ConfigError;
