//! # Representation of optimal solutions
//!
//! What the solvers hand back once they reach an optimal basis.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::linear_algebra::vector::DenseVector;

/// An optimal basic solution.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Value of every variable, zero outside of the basis.
    values: DenseVector,
    /// Basis indices, the `i`'th index being the variable that is basic in row `i`.
    basis: Vec<usize>,
    /// Value of the objective function at `values`.
    objective_value: f64,
    /// Number of basis changes made by the method that found this solution.
    iterations: usize,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(values: DenseVector, basis: Vec<usize>, objective_value: f64, iterations: usize) -> Self {
        debug_assert!(basis.iter().all(|&j| j < values.len()));

        Self { values, basis, objective_value, iterations }
    }

    /// Value of every variable.
    pub fn values(&self) -> &DenseVector {
        &self.values
    }

    /// The optimal basis.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Objective function value `cᵗx`.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Number of pivots made before the basis was optimal.
    ///
    /// For a solution found in two phases, only the pivots of the second phase are counted.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Split into values, basis and objective value.
    pub fn into_parts(self) -> (DenseVector, Vec<usize>, f64) {
        (self.values, self.basis, self.objective_value)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "objective value: {}", self.objective_value)?;
        writeln!(f, "basis: {:?}", self.basis)?;
        writeln!(f, "iterations: {}", self.iterations)?;
        writeln!(f, "values: {}", self.values)
    }
}
