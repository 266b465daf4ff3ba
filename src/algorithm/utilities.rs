//! # Utilities
//!
//! Quantities derived from a problem and a basis alone, without any solver state. Useful to check
//! the result of a solve independently of the solver that produced it.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::error::Error;

/// Invert the basis matrix after checking that the basis fits the problem.
pub fn basis_inverse(problem: &CanonicalForm, basis: &[usize]) -> Result<DenseMatrix, Error> {
    problem.validate_basis(basis)?;
    problem.basis_matrix(basis).invert()
}

/// Simplex multipliers `yᵗ = c_Bᵗ B⁻¹` of a basis.
pub fn potentials(problem: &CanonicalForm, basis: &[usize]) -> Result<DenseVector, Error> {
    let inverse = basis_inverse(problem, basis)?;
    let basis_costs = basis.iter().map(|&j| problem.cost()[j]).collect();

    Ok(inverse.left_multiply_vector(&basis_costs))
}

/// Relative costs `c - Aᵗy` for given simplex multipliers.
pub fn relative_costs_for_potentials(problem: &CanonicalForm, potentials: &DenseVector) -> DenseVector {
    let y_a = problem.constraints().left_multiply_vector(potentials);

    problem.cost().iter().zip(y_a.iter())
        .map(|(cost, product)| cost - product)
        .collect()
}

/// Relative costs of all columns with respect to a basis.
///
/// A basis of a minimization problem is optimal (dual feasible) when none of these is negative.
pub fn reduced_costs(problem: &CanonicalForm, basis: &[usize]) -> Result<DenseVector, Error> {
    let y = potentials(problem, basis)?;

    Ok(relative_costs_for_potentials(problem, &y))
}

/// The basic solution of a basis: `B⁻¹b` on the basis columns, zero elsewhere.
///
/// The solution is only feasible if none of the values is negative.
pub fn basic_solution(problem: &CanonicalForm, basis: &[usize]) -> Result<DenseVector, Error> {
    let inverse = basis_inverse(problem, basis)?;
    let basic_values = inverse.multiply_vector(problem.b());

    let mut values = DenseVector::zeros(problem.nr_columns());
    for (&j, &value) in basis.iter().zip(basic_values.iter()) {
        values[j] = value;
    }

    Ok(values)
}
