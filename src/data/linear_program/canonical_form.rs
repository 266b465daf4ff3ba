//! # Linear programs in canonical form
//!
//! Minimize `cᵗx` subject to `Ax = b` and `x >= 0`.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::error::Error;

/// A linear program with only equality constraints and nonnegative variables.
///
/// The dimensions are checked at creation: `c` has length `n`, `A` is `m x n`, `b` has length `m`
/// and there are fewer constraints than variables.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalForm {
    cost: DenseVector,
    constraints: DenseMatrix,
    b: DenseVector,
}

impl CanonicalForm {
    /// Create a new linear program in canonical form.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective coefficients `c`, one per variable.
    /// * `constraints`: Constraint matrix `A`, one row per constraint.
    /// * `b`: Right-hand side, one value per constraint.
    ///
    /// # Return value
    ///
    /// The problem, or `Error::DimensionMismatch` describing the first inconsistency found.
    pub fn new(cost: DenseVector, constraints: DenseMatrix, b: DenseVector) -> Result<Self, Error> {
        let (m, n) = (constraints.nr_rows(), constraints.nr_columns());

        if cost.len() != n {
            return Err(Error::DimensionMismatch(format!(
                "cost vector has length {}, but there are {} columns", cost.len(), n,
            )));
        }
        if b.len() != m {
            return Err(Error::DimensionMismatch(format!(
                "right-hand side has length {}, but there are {} rows", b.len(), m,
            )));
        }
        if m >= n {
            return Err(Error::DimensionMismatch(format!(
                "there should be fewer constraints than variables, but there are {} rows and {} columns", m, n,
            )));
        }

        Ok(Self { cost, constraints, b })
    }

    /// Create a new linear program from plain `Vec`s.
    ///
    /// Like `new`, but also rejects constraint rows of unequal length.
    pub fn from_rows(cost: Vec<f64>, constraints: Vec<Vec<f64>>, b: Vec<f64>) -> Result<Self, Error> {
        let n = cost.len();
        if let Some((i, row)) = constraints.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::DimensionMismatch(format!(
                "constraint row {} has length {}, but the cost vector has length {}", i, row.len(), n,
            )));
        }

        Self::new(cost.into(), DenseMatrix::from_rows(constraints, n), b.into())
    }

    /// Check that a basis can be used with this problem.
    ///
    /// # Return value
    ///
    /// `Error::InvalidBasis` if the basis doesn't have one index per row, contains an index that
    /// is out of range, or contains an index more than once.
    pub fn validate_basis(&self, basis: &[usize]) -> Result<(), Error> {
        if basis.len() != self.nr_rows() {
            return Err(Error::InvalidBasis(format!(
                "basis has {} indices, but there are {} rows", basis.len(), self.nr_rows(),
            )));
        }
        if let Some(&j) = basis.iter().find(|&&j| j >= self.nr_columns()) {
            return Err(Error::InvalidBasis(format!(
                "index {} is out of range for {} columns", j, self.nr_columns(),
            )));
        }
        let mut seen = HashSet::with_capacity(basis.len());
        if let Some(&j) = basis.iter().find(|&&j| !seen.insert(j)) {
            return Err(Error::InvalidBasis(format!("index {} appears more than once", j)));
        }

        Ok(())
    }

    /// The square matrix formed by the basis columns, in basis order.
    pub fn basis_matrix(&self, basis: &[usize]) -> DenseMatrix {
        self.constraints.select_columns(basis)
    }

    /// Value of the objective function `cᵗx`.
    pub fn objective_value(&self, x: &DenseVector) -> f64 {
        self.cost.inner_product(x)
    }

    /// Whether `x` satisfies all constraints.
    ///
    /// # Arguments
    ///
    /// * `x`: Candidate solution of length `n`.
    /// * `tolerance`: Allowed violation of the bounds, and of the equality constraints relative to
    /// the size of `b`.
    pub fn is_feasible(&self, x: &DenseVector, tolerance: f64) -> bool {
        debug_assert_eq!(x.len(), self.nr_columns());

        let scale = self.b.max_abs().max(1_f64);
        x.iter().all(|&value| value >= -tolerance)
            && self.constraints.multiply_vector(x).iter().zip(self.b.iter())
                .all(|(lhs, rhs)| (lhs - rhs).abs() <= tolerance * scale)
    }

    /// Negate all constraints that have a negative right-hand side.
    ///
    /// The set of feasible solutions doesn't change.
    ///
    /// # Return value
    ///
    /// The indices of the rows that were negated.
    pub fn normalize_right_hand_side(&mut self) -> Vec<usize> {
        let negative_rows = (0..self.nr_rows()).filter(|&i| self.b[i] < 0_f64).collect::<Vec<_>>();
        for &i in &negative_rows {
            self.constraints.multiply_row(i, -1_f64);
            self.b[i] = -self.b[i];
        }

        negative_rows
    }

    /// Remove constraints.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated indices of the constraints to remove.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        self.constraints.remove_rows(rows);
        self.b.remove_indices(rows);
    }

    /// Objective coefficients `c`.
    pub fn cost(&self) -> &DenseVector {
        &self.cost
    }

    /// Constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix {
        &self.constraints
    }

    /// Column `j` of the constraint matrix.
    pub fn column(&self, j: usize) -> DenseVector {
        self.constraints.column(j)
    }

    /// Right-hand side `b`.
    pub fn b(&self) -> &DenseVector {
        &self.b
    }

    /// Number of constraints `m`.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of variables `n`.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }
}

impl Display for CanonicalForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "minimize {}", self.cost)?;
        writeln!(f, "subject to")?;
        write!(f, "{}", self.constraints)?;
        writeln!(f, "=")?;
        writeln!(f, "{}", self.b)
    }
}
