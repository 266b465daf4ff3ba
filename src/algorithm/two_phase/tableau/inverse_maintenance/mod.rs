//! # Maintaining a basis inverse
//!
//! The simplex method requires us to keep track of the basis inverse. Two representations are
//! provided: `ProductForm` updates an explicit inverse with a single elimination step per basis
//! change, `Reinversion` inverts the basis matrix again after every change.
use std::fmt::Display;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::error::Error;

pub use product_form::{ProductForm, update_inverse};
pub use reinversion::Reinversion;

mod product_form;
mod reinversion;

/// Maintain a basis inverse.
///
/// Should facilitate quick solving of the linear systems `Bx = a` and `yᵗB = c_Bᵗ`.
pub trait InverseMaintenance: Display + Sized {
    /// Create a basis inverse when only the basis indices are known.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem whose constraint columns form the basis.
    /// * `basis`: Indices of columns that are to be in the basis, one for each row.
    ///
    /// # Return value
    ///
    /// `Error::SingularMatrix` if those columns don't form an invertible matrix.
    fn from_basis(problem: &CanonicalForm, basis: &[usize]) -> Result<Self, Error>;

    /// Representation of the unit basis of size `m`, as used with artificial variables.
    fn identity(m: usize) -> Self;

    /// Replace a basis column.
    ///
    /// # Arguments
    ///
    /// * `pivot_row_index`: Position in the basis of the leaving column.
    /// * `original_column`: The entering column as it appears in the problem.
    /// * `column`: The entering column with respect to the current basis, that is, `B⁻¹a`.
    fn change_basis(
        &mut self,
        pivot_row_index: usize,
        original_column: &DenseVector,
        column: &DenseVector,
    ) -> Result<(), Error>;

    /// The current basis inverse.
    fn inverse(&self) -> &DenseMatrix;

    /// Column of the original problem with respect to the current basis.
    fn generate_column(&self, original_column: &DenseVector) -> DenseVector {
        self.inverse().multiply_vector(original_column)
    }

    /// Single element of `B⁻¹a`.
    fn generate_element(&self, i: usize, original_column: &DenseVector) -> f64 {
        debug_assert!(i < self.m());

        self.inverse().row(i).iter().zip(original_column.iter()).map(|(a, b)| a * b).sum()
    }

    /// Row `i` of the basis inverse.
    fn basis_inverse_row(&self, i: usize) -> DenseVector {
        debug_assert!(i < self.m());

        self.inverse().row(i).to_vec().into()
    }

    /// The simplex multipliers `yᵗ = c_Bᵗ B⁻¹`.
    ///
    /// # Arguments
    ///
    /// * `basis_costs`: Cost of each basis column, in basis order.
    fn potentials(&self, basis_costs: &DenseVector) -> DenseVector {
        self.inverse().left_multiply_vector(basis_costs)
    }

    /// Number of rows of the basis.
    fn m(&self) -> usize {
        self.inverse().nr_rows()
    }
}
