//! # Phase two
//!
//! Reducing the cost of a basic feasible solution until no column has a negative relative cost.
use log::{debug, trace};

use crate::algorithm::SolverConfig;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::inverse_maintenance::InverseMaintenance;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::error::Error;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, the tableau should hold a valid basis whose basic solution is
/// nonnegative (primal feasible). The basis doesn't need to be optimal.
///
/// # Return value
///
/// The number of pivots made when the tableau holds an optimal basis, `Error::Unbounded` if the
/// ratio test found no limit on the entering variable. The problem can't be infeasible, as a
/// feasible solution is needed to start using this method.
pub fn primal<IM, PR>(tableau: &mut Tableau<IM>, config: &SolverConfig) -> Result<usize, Error>
where
    IM: InverseMaintenance,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut iteration = 0;
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(tableau));
        trace!("primal iteration {}\n{}", iteration, tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                let column = tableau.generate_column(column_index);
                match tableau.select_primal_pivot_row(&column) {
                    Some((row_index, theta)) => {
                        trace!(
                            "primal iteration {}: column {} (relative cost {:e}) enters in row {} \
                            replacing column {}, step {:e}",
                            iteration, column_index, cost, row_index,
                            tableau.basis_indices()[row_index], theta,
                        );
                        tableau.bring_into_basis(column_index, row_index, &column, theta)?;
                    },
                    None => {
                        debug!("primal: column {} has no limiting row after {} iterations, unbounded", column_index, iteration);
                        break Err(Error::Unbounded);
                    },
                }
            },
            None => {
                debug!("primal: optimal after {} iterations, objective {}", iteration, tableau.objective_function_value());
                break Ok(iteration);
            },
        }

        iteration += 1;
        if config.should_log(iteration) {
            debug!("primal iteration {}: objective {}", iteration, tableau.objective_function_value());
        }
    }
}

/// Optimize starting from a primal feasible basis.
///
/// The basis inverse is computed from scratch before the first iteration and updated
/// incrementally after that.
///
/// # Arguments
///
/// * `problem`: Problem to solve.
/// * `basis`: Column index basic in each row.
/// * `config`: Tolerance and logging settings.
///
/// # Return value
///
/// The optimal solution, `Error::Unbounded`, or an error describing why the basis can't be used
/// (`Error::InvalidBasis`, `Error::SingularMatrix`).
pub fn solve_from_basis<IM, PR>(
    problem: &CanonicalForm,
    basis: Vec<usize>,
    config: &SolverConfig,
) -> Result<Solution, Error>
where
    IM: InverseMaintenance,
    PR: PivotRule,
{
    let mut tableau = Tableau::<IM>::new(problem, basis, config.epsilon)?;
    if let Some(row) = (0..tableau.nr_rows()).find(|&i| tableau.basic_value(i) < -config.epsilon) {
        return Err(Error::InvalidBasis(format!(
            "basic solution is negative in row {} ({})", row, tableau.basic_value(row),
        )));
    }

    let iterations = primal::<_, PR>(&mut tableau, config)?;

    Ok(tableau.into_solution(iterations))
}
