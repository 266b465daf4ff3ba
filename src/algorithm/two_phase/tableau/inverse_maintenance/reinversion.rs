//! # Inverting from scratch
//!
//! Keeps the basis matrix itself and inverts it after every change. Expensive, but free of the
//! error that accumulates over many product form updates.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::tableau::inverse_maintenance::InverseMaintenance;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::error::Error;

/// Basis matrix together with its inverse.
#[derive(Clone, Debug, PartialEq)]
pub struct Reinversion {
    basis_matrix: DenseMatrix,
    inverse: DenseMatrix,
}

impl InverseMaintenance for Reinversion {
    fn from_basis(problem: &CanonicalForm, basis: &[usize]) -> Result<Self, Error> {
        let basis_matrix = problem.basis_matrix(basis);
        let inverse = basis_matrix.invert()?;

        Ok(Self { basis_matrix, inverse })
    }

    fn identity(m: usize) -> Self {
        Self {
            basis_matrix: DenseMatrix::identity(m),
            inverse: DenseMatrix::identity(m),
        }
    }

    fn change_basis(
        &mut self,
        pivot_row_index: usize,
        original_column: &DenseVector,
        _column: &DenseVector,
    ) -> Result<(), Error> {
        let mut basis_matrix = self.basis_matrix.clone();
        basis_matrix.set_column(pivot_row_index, original_column);
        // Only commit once the new basis is known to be invertible
        self.inverse = basis_matrix.invert()?;
        self.basis_matrix = basis_matrix;

        Ok(())
    }

    fn inverse(&self) -> &DenseMatrix {
        &self.inverse
    }
}

impl Display for Reinversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Basis matrix:")?;
        write!(f, "{}", self.basis_matrix)?;
        writeln!(f, "Basis inverse:")?;
        write!(f, "{}", self.inverse)
    }
}
