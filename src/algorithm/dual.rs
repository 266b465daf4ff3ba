//! # The dual simplex method
//!
//! Starts from a basis that is dual feasible (no negative relative costs) but primal infeasible
//! (some basic values negative) and keeps the relative costs nonnegative while removing the
//! negative basic values one at a time. Useful when a constraint is added to a problem that was
//! already solved, or for problems of the form `Ax >= b` with nonnegative cost, where the slack
//! basis is dual feasible.
//!
//! Every iteration inverts the basis matrix from scratch.
use std::collections::HashSet;

use log::{debug, trace};

use crate::algorithm::SolverConfig;
use crate::algorithm::two_phase::tableau::inverse_maintenance::{InverseMaintenance, Reinversion};
use crate::algorithm::utilities::{potentials, relative_costs_for_potentials};
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::error::Error;

/// Optimize starting from a dual feasible basis.
///
/// # Arguments
///
/// * `problem`: Problem to solve.
/// * `basis`: Column index basic in each row. No column may have a negative relative cost with
/// respect to it.
/// * `y`: Simplex multipliers belonging to `basis`. Computed as `c_Bᵗ B⁻¹` when not provided.
/// * `config`: Tolerance and logging settings.
///
/// # Return value
///
/// The optimal solution, `Error::Infeasible` if the problem has no feasible solution, or an error
/// describing why the start can't be used (`Error::InvalidBasis`, `Error::DimensionMismatch`,
/// `Error::SingularMatrix`).
pub fn dual(
    problem: &CanonicalForm,
    mut basis: Vec<usize>,
    y: Option<DenseVector>,
    config: &SolverConfig,
) -> Result<Solution, Error> {
    problem.validate_basis(&basis)?;
    let mut y = match y {
        Some(y) if y.len() != problem.nr_rows() => return Err(Error::DimensionMismatch(format!(
            "dual solution has length {}, but there are {} rows", y.len(), problem.nr_rows(),
        ))),
        Some(y) => y,
        None => potentials(problem, &basis)?,
    };

    let relative_costs = relative_costs_for_potentials(problem, &y);
    if let Some(j) = (0..problem.nr_columns()).find(|&j| relative_costs[j] < -config.epsilon) {
        return Err(Error::InvalidBasis(format!(
            "not dual feasible: column {} has relative cost {}", j, relative_costs[j],
        )));
    }

    let mut iteration = 0;
    loop {
        let inverse = Reinversion::from_basis(problem, &basis)?;
        let basic_values = inverse.generate_column(problem.b());

        let Some(pivot_row) = basic_values.iter().position(|&value| value < -config.epsilon) else {
            debug!("dual: optimal after {} iterations", iteration);
            break Ok(to_solution(problem, basis, &basic_values, iteration));
        };

        // Direction in which the dual solution moves
        let basis_inverse_row = inverse.basis_inverse_row(pivot_row);
        let mu = problem.constraints().left_multiply_vector(&basis_inverse_row);
        let relative_costs = relative_costs_for_potentials(problem, &y);
        trace!("dual iteration {}: basic values {}, relative costs {}", iteration, basic_values, relative_costs);

        let in_basis = basis.iter().copied().collect::<HashSet<_>>();
        let mut entering: Option<(usize, f64)> = None;
        for j in (0..problem.nr_columns()).filter(|j| !in_basis.contains(j)) {
            if mu[j] < -config.epsilon {
                let step = relative_costs[j].max(0_f64) / -mu[j];
                if entering.is_none_or(|(_, minimum)| step < minimum) {
                    entering = Some((j, step));
                }
            }
        }

        let Some((pivot_column, step)) = entering else {
            debug!("dual: row {} can't be made nonnegative after {} iterations, infeasible", pivot_row, iteration);
            break Err(Error::Infeasible);
        };

        trace!(
            "dual iteration {}: column {} leaves from row {} (value {:e}), column {} enters, step {:e}",
            iteration, basis[pivot_row], pivot_row, basic_values[pivot_row], pivot_column, step,
        );
        basis[pivot_row] = pivot_column;
        y.add_multiple(-step, &basis_inverse_row);

        iteration += 1;
        if config.should_log(iteration) {
            let infeasibility: f64 = basic_values.iter().filter(|&&value| value < 0_f64).sum();
            debug!("dual iteration {}: total infeasibility {}", iteration, infeasibility);
        }
    }
}

fn to_solution(problem: &CanonicalForm, basis: Vec<usize>, basic_values: &DenseVector, iterations: usize) -> Solution {
    let mut values = DenseVector::zeros(problem.nr_columns());
    for (&j, &value) in basis.iter().zip(basic_values.iter()) {
        // Within tolerance of zero
        values[j] = value.max(0_f64);
    }
    let objective_value = problem.objective_value(&values);

    Solution::new(values, basis, objective_value, iterations)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::dual::dual;
    use crate::algorithm::SolverConfig;
    use crate::data::linear_algebra::vector::DenseVector;
    use crate::data::linear_program::canonical_form::CanonicalForm;
    use crate::error::Error;
    use crate::tests::problem_4;

    #[test]
    fn dual_simplex() {
        let problem = problem_4::create_problem();
        let solution = dual(&problem, problem_4::slack_basis(), None, &SolverConfig::default()).unwrap();

        assert_eq!(solution.basis(), &[0, 1]);
        assert_abs_diff_eq!(solution.values()[0], 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(solution.values()[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(solution.objective_value(), problem_4::OPTIMAL_OBJECTIVE_VALUE, epsilon = 1e-12);
        // Slack 2 and then slack 3 leave
        assert_eq!(solution.iterations(), 2);
    }

    #[test]
    fn with_given_dual_solution() {
        let problem = problem_4::create_problem();
        let y = DenseVector::zeros(2);
        let solution = dual(&problem, problem_4::slack_basis(), Some(y), &SolverConfig::default()).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), problem_4::OPTIMAL_OBJECTIVE_VALUE, epsilon = 1e-12);

        assert!(matches!(
            dual(&problem, problem_4::slack_basis(), Some(DenseVector::zeros(3)), &SolverConfig::default()),
            Err(Error::DimensionMismatch(_)),
        ));
    }

    #[test]
    fn already_optimal() {
        let problem = problem_4::create_problem();
        let solution = dual(&problem, vec![0, 1], None, &SolverConfig::default()).unwrap();
        assert_eq!(solution.iterations(), 0);
        assert_abs_diff_eq!(solution.objective_value(), problem_4::OPTIMAL_OBJECTIVE_VALUE, epsilon = 1e-12);
    }

    #[test]
    fn not_dual_feasible() {
        let problem = problem_4::create_problem();
        // Column 2 has relative cost -1 for these multipliers
        let y = DenseVector::from(vec![1_f64, 0_f64]);
        assert!(matches!(
            dual(&problem, problem_4::slack_basis(), Some(y), &SolverConfig::default()),
            Err(Error::InvalidBasis(_)),
        ));
    }

    #[test]
    fn infeasible() {
        // x_0 + x_1 >= 1 and x_0 + x_1 <= 0, with slacks
        let problem = CanonicalForm::from_rows(
            vec![1_f64, 1_f64, 0_f64, 0_f64],
            vec![
                vec![-1_f64, -1_f64, 1_f64, 0_f64],
                vec![1_f64, 1_f64, 0_f64, 1_f64],
            ],
            vec![-1_f64, 0_f64],
        ).unwrap();
        assert_eq!(dual(&problem, vec![2, 3], None, &SolverConfig::default()), Err(Error::Infeasible));
    }
}
