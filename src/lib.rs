//! # A dense revised simplex solver
//!
//! Linear programs in canonical form, minimize `cᵗx` subject to `Ax = b` and `x >= 0`, are solved
//! using the revised simplex method as described in the book Combinatorial Optimization by
//! Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! The primal method starts from a feasible basis, which can be found with the two phase method
//! if none is known. The dual method starts from a basis of which all relative costs are
//! nonnegative.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use algorithm::{solve, solve_dual, solve_primal, solve_two_phase, SolveRelaxation, SolverConfig};
pub use error::Error;

#[cfg(test)]
mod tests;
