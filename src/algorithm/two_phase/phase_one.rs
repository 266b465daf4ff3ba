//! # Phase one
//!
//! Computing a basic feasible solution with artificial variables. One artificial variable is added
//! per row, and their sum is minimized. If that sum can be brought to zero, the basis found is
//! feasible for the original problem, once any artificial variables that remain in the basis at
//! zero level are pivoted out. Rows for which that is not possible are linearly dependent on the
//! other rows and are removed.
use index_utils::remove_indices;
use log::{debug, info};

use crate::algorithm::SolverConfig;
use crate::algorithm::two_phase::{FeasibleBasis, Rank};
use crate::algorithm::two_phase::phase_two;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::inverse_maintenance::InverseMaintenance;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::error::Error;

/// Compute a basic feasible solution.
///
/// # Arguments
///
/// * `problem`: Problem to find a feasible basis for. Its right-hand side may have any sign.
/// * `config`: Tolerance and logging settings.
///
/// # Return value
///
/// A feasible basis together with the problem it belongs to (rows with a negative right-hand side
/// negated, redundant rows removed), or `Error::Infeasible` if there is no feasible solution.
pub fn feasible_basis<IM, PR>(problem: &CanonicalForm, config: &SolverConfig) -> Result<FeasibleBasis, Error>
where
    IM: InverseMaintenance,
    PR: PivotRule,
{
    let mut reduced = problem.clone();
    let negated = reduced.normalize_right_hand_side();
    if !negated.is_empty() {
        debug!("phase one: negated rows {:?} to make the right-hand side nonnegative", negated);
    }

    // Original index of each of the remaining rows
    let mut remaining_rows = (0..problem.nr_rows()).collect::<Vec<_>>();
    let mut removed_rows = Vec::new();
    loop {
        match artificial_primal::<IM, PR>(&reduced, config)? {
            ArtificialResult::Feasible { basis, values } => {
                let rank = if removed_rows.is_empty() {
                    Rank::Full
                } else {
                    removed_rows.sort_unstable();
                    Rank::Deficient(removed_rows)
                };
                info!("phase one: found a feasible basis ({:?})", rank);

                break Ok(FeasibleBasis::new(reduced, basis, values, rank));
            },
            ArtificialResult::Redundant(rows) => {
                debug!("phase one: removing redundant rows {:?} and starting again", rows);

                removed_rows.extend(rows.iter().map(|&i| remaining_rows[i]));
                remove_indices(&mut remaining_rows, &rows);
                reduced.remove_rows(&rows);
            },
        }
    }
}

/// Outcome of a single attempt at finding a feasible basis.
#[derive(Debug, PartialEq)]
enum ArtificialResult {
    /// Basis of original columns, and the values of the original variables.
    Feasible {
        basis: Vec<usize>,
        values: DenseVector,
    },
    /// Sorted indices of rows that are linearly dependent on the other rows.
    Redundant(Vec<usize>),
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the original linear program is found.
///
/// # Arguments
///
/// * `problem`: Problem with a nonnegative right-hand side.
///
/// # Return value
///
/// A basis without artificial variables, or the rows that need to be removed to find one.
/// `Error::Infeasible` if the sum of the artificial variables can't reach zero.
fn artificial_primal<IM, PR>(problem: &CanonicalForm, config: &SolverConfig) -> Result<ArtificialResult, Error>
where
    IM: InverseMaintenance,
    PR: PivotRule,
{
    debug_assert!(problem.b().iter().all(|&value| value >= 0_f64));

    let (m, n) = (problem.nr_rows(), problem.nr_columns());
    let artificial = artificial_problem(problem)?;
    let mut tableau = Tableau::new_with_inverse_maintainer(
        &artificial,
        IM::identity(m),
        (n..(n + m)).collect(),
        config.epsilon,
    );

    let iterations = phase_two::primal::<_, PR>(&mut tableau, config)?;

    let infeasibility = tableau.objective_function_value();
    debug!("phase one: sum of artificial variables is {} after {} iterations", infeasibility, iterations);
    if infeasibility > config.epsilon * problem.b().norm_1().max(1_f64) {
        debug!("phase one: infeasible");
        return Err(Error::Infeasible);
    }

    let rows_to_remove = remove_artificial_basis_variables(&mut tableau, n)?;
    if !rows_to_remove.is_empty() {
        return Ok(ArtificialResult::Redundant(rows_to_remove));
    }

    let (basis, values) = tableau.into_basis_and_values();
    debug_assert!(basis.iter().all(|&j| j < n));
    let values = values.iter().take(n).copied().collect();

    Ok(ArtificialResult::Feasible { basis, values })
}

/// The problem extended with an artificial variable for each row.
///
/// The artificial variables have indices `n` until `n + m`, cost one and form an identity matrix.
/// The original variables have cost zero.
fn artificial_problem(problem: &CanonicalForm) -> Result<CanonicalForm, Error> {
    let (m, n) = (problem.nr_rows(), problem.nr_columns());

    let cost = (0..(n + m)).map(|j| if j < n { 0_f64 } else { 1_f64 }).collect();
    let constraints = problem.constraints().clone().hcat(&DenseMatrix::identity(m));

    CanonicalForm::new(cost, constraints, problem.b().clone())
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau of the artificial problem with an objective value of zero.
/// * `nr_original_columns`: Number of columns that are not artificial.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Is sorted as a side effect of the algorithm.
fn remove_artificial_basis_variables<IM: InverseMaintenance>(
    tableau: &mut Tableau<IM>,
    nr_original_columns: usize,
) -> Result<Vec<usize>, Error> {
    // Each pivot below only replaces the artificial in `pivot_row`, other positions don't move
    let mut artificial_rows = tableau.basis_indices().iter()
        .enumerate()
        .filter(|&(_, &j)| j >= nr_original_columns)
        .map(|(row, &artificial)| (artificial, row))
        .collect::<Vec<_>>();
    artificial_rows.sort_unstable();

    let mut rows_to_remove = Vec::new();
    for (artificial, pivot_row) in artificial_rows {
        let pivot_column = (0..nr_original_columns)
            .filter(|&j| !tableau.is_in_basis(j))
            .find(|&j| tableau.generate_element(pivot_row, j).abs() > tableau.epsilon());

        match pivot_column {
            Some(pivot_column) => {
                debug!("phase one: column {} replaces artificial {} in row {}", pivot_column, artificial, pivot_row);
                let column = tableau.generate_column(pivot_column);
                tableau.bring_into_basis(pivot_column, pivot_row, &column, 0_f64)?;
            },
            None => rows_to_remove.push(artificial - nr_original_columns),
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    Ok(rows_to_remove)
}
