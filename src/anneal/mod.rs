//! Simulated annealing of the lattice spins.
//!
//! Single-spin-flip Metropolis sweeps under a deterministic cooling
//! schedule. The runner borrows a [`Lattice`](crate::lattice::Lattice) and
//! only talks to it through its energy and flip methods.
//!
//! # References
//!
//! - Metropolis, Rosenbluth, Rosenbluth, Teller & Teller (1953),
//!   "Equation of State Calculations by Fast Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;

pub use config::{AnnealConfig, CoolingSchedule};
pub use runner::{AnnealResult, AnnealRunner};
