//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau is never stored explicitly: columns and costs are computed from the original
//! problem and the basis inverse when they are needed.
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::tableau::inverse_maintenance::InverseMaintenance;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::error::Error;

pub mod inverse_maintenance;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It holds only a reference to the (immutable) problem it solves, but owns the data structures
/// that describe the current solution basis.
#[derive(Debug, PartialEq)]
pub struct Tableau<'a, IM> {
    problem: &'a CanonicalForm,

    /// Represents the inverse of the `m x m` basis matrix.
    ///
    /// This attribute changes with a basis change.
    inverse_maintainer: IM,

    /// Column indices of the basis, position `i` being basic in row `i`.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    /// Value of every variable, zero outside of the basis.
    values: DenseVector,

    /// Values smaller in absolute value are treated as zero.
    epsilon: f64,
}

impl<'a, IM> Tableau<'a, IM>
where
    IM: InverseMaintenance,
{
    /// Create a tableau by inverting the basis matrix.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem to solve.
    /// * `basis`: Basis to start from, one column index for each row.
    /// * `epsilon`: Values smaller in absolute value are treated as zero.
    ///
    /// # Return value
    ///
    /// `Error::InvalidBasis` if the basis doesn't fit the problem, `Error::SingularMatrix` if it
    /// can't be inverted.
    pub fn new(problem: &'a CanonicalForm, basis: Vec<usize>, epsilon: f64) -> Result<Self, Error> {
        problem.validate_basis(&basis)?;
        let inverse_maintainer = IM::from_basis(problem, &basis)?;

        Ok(Self::new_with_inverse_maintainer(problem, inverse_maintainer, basis, epsilon))
    }

    /// Create a tableau when the basis inverse is already available.
    ///
    /// The basic solution is computed from the inverse as `B⁻¹b`.
    pub fn new_with_inverse_maintainer(
        problem: &'a CanonicalForm,
        inverse_maintainer: IM,
        basis: Vec<usize>,
        epsilon: f64,
    ) -> Self {
        debug_assert_eq!(basis.len(), problem.nr_rows());
        debug_assert_eq!(inverse_maintainer.m(), problem.nr_rows());

        let basic_values = inverse_maintainer.generate_column(problem.b());
        let mut values = DenseVector::zeros(problem.nr_columns());
        for (&j, &value) in basis.iter().zip(basic_values.iter()) {
            values[j] = value;
        }

        Self {
            problem,
            inverse_maintainer,
            basis_columns: basis.iter().copied().collect(),
            basis_indices: basis,
            values,
            epsilon,
        }
    }

    /// Brings a column into the basis by updating the basis inverse, the basic solution and the
    /// data structures holding the collection of basis columns.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column entering the basis, not yet in the basis.
    /// * `pivot_row_index`: Basis position of the column that leaves.
    /// * `column`: The entering column with respect to the current basis.
    /// * `theta`: Value of the entering variable after the pivot, as found by the ratio test.
    pub fn bring_into_basis(
        &mut self,
        pivot_column_index: usize,
        pivot_row_index: usize,
        column: &DenseVector,
        theta: f64,
    ) -> Result<(), Error> {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let original_column = self.problem.column(pivot_column_index);
        self.inverse_maintainer.change_basis(pivot_row_index, &original_column, column)?;

        for (i, &j) in self.basis_indices.iter().enumerate() {
            if i != pivot_row_index {
                let value = self.values[j] - theta * column[i];
                // Rounding errors shouldn't make a solution infeasible
                self.values[j] = if value < 0_f64 && value > -self.epsilon { 0_f64 } else { value };
            }
        }
        let leaving_column = self.basis_indices[pivot_row_index];
        self.values[leaving_column] = 0_f64;
        self.values[pivot_column_index] = theta;

        self.update_basis_indices(pivot_row_index, pivot_column_index);

        Ok(())
    }

    /// Update the basis index.
    ///
    /// Removes the index of the variable leaving the basis from the `basis_columns` attribute,
    /// while inserting the entering variable index.
    fn update_basis_indices(&mut self, pivot_row_index: usize, pivot_column_index: usize) {
        let leaving_column = self.basis_indices[pivot_row_index];
        self.basis_indices[pivot_row_index] = pivot_column_index;
        let was_present = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_present);
        let is_new = self.basis_columns.insert(pivot_column_index);
        debug_assert!(is_new);
    }

    /// Simplex multipliers `yᵗ = c_Bᵗ B⁻¹`.
    pub fn potentials(&self) -> DenseVector {
        let basis_costs = self.basis_indices.iter()
            .map(|&j| self.problem.cost()[j])
            .collect();
        self.inverse_maintainer.potentials(&basis_costs)
    }

    /// Calculates the relative cost `c_j - yᵗA_j` of a column.
    ///
    /// # Arguments
    ///
    /// * `j`: Index of column to calculate the relative cost for, in range `0` until
    /// `self.nr_columns()`.
    ///
    /// # Note
    ///
    /// Recomputes the potentials, use `relative_costs` when the cost of many columns is needed.
    pub fn relative_cost(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.problem.cost()[j] - self.potentials().inner_product(&self.problem.column(j))
    }

    /// Relative cost of every column.
    ///
    /// Basis columns have a relative cost of zero, up to rounding errors.
    pub fn relative_costs(&self) -> DenseVector {
        let potentials = self.potentials();
        let y_a = self.problem.constraints().left_multiply_vector(&potentials);

        self.problem.cost().iter().zip(y_a.iter())
            .map(|(cost, product)| cost - product)
            .collect()
    }

    /// Column of original problem with respect to the current basis.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index of the variable, in range `0` until `self.nr_columns()`.
    ///
    /// # Return value
    ///
    /// `B⁻¹A_j`, of length `m`.
    pub fn generate_column(&self, j: usize) -> DenseVector {
        debug_assert!(j < self.nr_columns());

        self.inverse_maintainer.generate_column(&self.problem.column(j))
    }

    /// Single element `(B⁻¹A_j)_i` with respect to the current basis.
    pub fn generate_element(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.inverse_maintainer.generate_element(i, &self.problem.column(j))
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current basic value and the column. When there are multiple
    /// choices, the first (lowest basis position) is taken.
    ///
    /// # Arguments
    ///
    /// * `column`: Problem column with respect to the current basis with length `m`.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on and the ratio, which is the value the entering variable will
    /// have. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: &DenseVector) -> Option<(usize, f64)> {
        debug_assert_eq!(column.len(), self.nr_rows());

        let mut best: Option<(usize, f64)> = None;
        for (i, &direction) in column.iter().enumerate() {
            if direction > self.epsilon {
                let ratio = self.basic_value(i) / direction;
                if best.is_none_or(|(_, minimum)| ratio < minimum) {
                    best = Some((i, ratio));
                }
            }
        }

        best
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Value of the variable that is basic in row `i`.
    pub fn basic_value(&self, i: usize) -> f64 {
        debug_assert!(i < self.nr_rows());

        self.values[self.basis_indices[i]]
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// Value of every variable, zero outside of the basis.
    pub fn current_bfs(&self) -> &DenseVector {
        &self.values
    }

    /// Get the cost of the current solution.
    pub fn objective_function_value(&self) -> f64 {
        self.problem.objective_value(&self.values)
    }

    /// Column indices of the basis, in basis order.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.problem.nr_rows()
    }

    /// Number of variables in the problem.
    pub fn nr_columns(&self) -> usize {
        self.problem.nr_columns()
    }

    /// Values smaller in absolute value than this are treated as zero.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Basis indices and values of all variables.
    pub fn into_basis_and_values(self) -> (Vec<usize>, DenseVector) {
        (self.basis_indices, self.values)
    }

    /// The current basic solution as a `Solution`.
    ///
    /// # Arguments
    ///
    /// * `iterations`: Number of pivots that led to the current basis.
    pub fn into_solution(self, iterations: usize) -> Solution {
        let objective_value = self.objective_function_value();
        Solution::new(self.values, self.basis_indices, objective_value, iterations)
    }
}

/// Check whether the tableau represents a basic feasible solution.
///
/// Used in debug assertions: the solution should satisfy the constraints, be nonnegative and be
/// zero outside of the basis.
pub fn is_in_basic_feasible_solution_state<IM: InverseMaintenance>(tableau: &Tableau<IM>) -> bool {
    let tolerance = tableau.epsilon.sqrt();

    tableau.problem.is_feasible(&tableau.values, tolerance)
        && (0..tableau.nr_columns())
            .filter(|&j| !tableau.is_in_basis(j))
            .all(|j| tableau.values[j] == 0_f64)
}

impl<IM: InverseMaintenance> Display for Tableau<'_, IM> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Tableau:")?;
        writeln!(f, "basis: {:?}", self.basis_indices)?;
        writeln!(f, "values: {}", self.values)?;
        writeln!(f, "relative costs: {}", self.relative_costs())?;
        write!(f, "{}", self.inverse_maintainer)
    }
}
