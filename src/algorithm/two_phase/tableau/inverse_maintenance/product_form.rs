//! # Product form update
//!
//! After a basis change, the new inverse is the old inverse premultiplied by an elimination
//! matrix that differs from the identity in a single column. That product only touches every
//! element of the inverse once, so updating costs `O(m²)` instead of the `O(m³)` of inverting
//! again.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::tableau::inverse_maintenance::InverseMaintenance;
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::error::Error;

/// Explicit basis inverse, updated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductForm {
    inverse: DenseMatrix,
}

impl ProductForm {
    /// Wrap an existing basis inverse.
    pub fn new(inverse: DenseMatrix) -> Self {
        debug_assert_eq!(inverse.nr_rows(), inverse.nr_columns());

        Self { inverse }
    }
}

impl InverseMaintenance for ProductForm {
    fn from_basis(problem: &CanonicalForm, basis: &[usize]) -> Result<Self, Error> {
        problem.basis_matrix(basis).invert().map(Self::new)
    }

    fn identity(m: usize) -> Self {
        Self::new(DenseMatrix::identity(m))
    }

    fn change_basis(
        &mut self,
        pivot_row_index: usize,
        _original_column: &DenseVector,
        column: &DenseVector,
    ) -> Result<(), Error> {
        let eta = eta_column(column, pivot_row_index)?;
        apply_eta(&mut self.inverse, &eta, pivot_row_index);

        Ok(())
    }

    fn inverse(&self) -> &DenseMatrix {
        &self.inverse
    }
}

impl Display for ProductForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Basis inverse (product form):")?;
        write!(f, "{}", self.inverse)
    }
}

/// Compute the inverse of the basis that results from replacing a single column.
///
/// # Arguments
///
/// * `inverse`: Inverse of the current basis matrix `B`.
/// * `entering_column`: Column `a` that replaces column `pivot_row_index` of `B`.
/// * `pivot_row_index`: Basis position of the leaving column.
///
/// # Return value
///
/// The inverse of the new basis matrix, or `Error::SingularMatrix` when `a` lies in the span of the
/// remaining basis columns.
pub fn update_inverse(
    inverse: &DenseMatrix,
    entering_column: &DenseVector,
    pivot_row_index: usize,
) -> Result<DenseMatrix, Error> {
    debug_assert!(pivot_row_index < inverse.nr_rows());

    let column = inverse.multiply_vector(entering_column);
    let eta = eta_column(&column, pivot_row_index)?;

    let mut updated = inverse.clone();
    apply_eta(&mut updated, &eta, pivot_row_index);

    Ok(updated)
}

/// The column `ℓ` in which the elimination matrix differs from the identity.
///
/// With `σ = column[p]`, this is `-column / σ` everywhere except at `p`, where it is `1 / σ`.
fn eta_column(column: &DenseVector, pivot_row_index: usize) -> Result<DenseVector, Error> {
    let sigma = column[pivot_row_index];
    if sigma.abs() <= EPSILON {
        return Err(Error::SingularMatrix);
    }

    let mut eta = column.clone();
    eta[pivot_row_index] = -1_f64;
    eta.scale(-1_f64 / sigma);

    Ok(eta)
}

/// Premultiply `inverse` with the identity matrix that has column `p` replaced by `eta`.
fn apply_eta(inverse: &mut DenseMatrix, eta: &DenseVector, pivot_row_index: usize) {
    // Other rows read the pivot row before it is scaled
    for i in 0..inverse.nr_rows() {
        if i != pivot_row_index && eta[i] != 0_f64 {
            inverse.mul_add_rows(pivot_row_index, i, eta[i]);
        }
    }
    inverse.multiply_row(pivot_row_index, eta[pivot_row_index]);
}
