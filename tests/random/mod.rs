//! # Randomly generated instances
//!
//! Seeded, such that failures can be reproduced.
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use revised_simplex::algorithm::two_phase::tableau::inverse_maintenance::update_inverse;
use revised_simplex::algorithm::utilities::{basic_solution, reduced_costs};
use revised_simplex::data::linear_algebra::matrix::DenseMatrix;
use revised_simplex::data::linear_algebra::vector::DenseVector;
use revised_simplex::data::linear_program::canonical_form::CanonicalForm;
use revised_simplex::{solve, solve_dual, solve_two_phase};

use super::init_logging;

fn random_matrix(rng: &mut StdRng, nr_rows: usize, nr_columns: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    (0..nr_rows)
        .map(|_| (0..nr_columns).map(|_| rng.gen_range(low..high)).collect())
        .collect()
}

fn random_vector(rng: &mut StdRng, len: usize, low: f64, high: f64) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(low..high)).collect()
}

fn max_difference(left: &DenseMatrix, right: &DenseMatrix) -> f64 {
    (0..left.nr_rows())
        .flat_map(|i| (0..left.nr_columns()).map(move |j| (i, j)))
        .map(|(i, j)| (left.get_value(i, j) - right.get_value(i, j)).abs())
        .fold(0_f64, f64::max)
}

#[test]
fn update_agrees_with_inversion() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    let mut nr_checked = 0;
    for _ in 0..400 {
        let m = rng.gen_range(2..11);
        let basis = DenseMatrix::from_data(random_matrix(&mut rng, m, m, -10_f64, 10_f64));
        let Ok(inverse) = basis.invert() else { continue };
        // Badly conditioned
        if max_difference(&basis.multiply(&inverse), &DenseMatrix::identity(m)) > 1e-9 {
            continue;
        }

        let column = DenseVector::from(random_vector(&mut rng, m, -10_f64, 10_f64));
        let pivot_row = rng.gen_range(0..m);
        if inverse.multiply_vector(&column)[pivot_row].abs() < 1e-3 {
            continue;
        }

        let mut replaced = basis.clone();
        replaced.set_column(pivot_row, &column);
        let Ok(expected) = replaced.invert() else { continue };
        if max_difference(&replaced.multiply(&expected), &DenseMatrix::identity(m)) > 1e-9 {
            continue;
        }

        let updated = update_inverse(&inverse, &column, pivot_row).unwrap();
        let scale = expected.max_abs().max(1_f64);
        assert!(
            max_difference(&updated, &expected) / scale < 1e-6,
            "update differs from inversion for\n{}column {} replaced by {}", basis, pivot_row, column,
        );
        nr_checked += 1;
    }

    assert!(nr_checked >= 100);
}

#[test]
fn feasible_by_construction() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1729);

    for _ in 0..50 {
        let m = rng.gen_range(2..6);
        let n = m + rng.gen_range(1..5);
        let constraints = random_matrix(&mut rng, m, n, -10_f64, 10_f64);
        let point = DenseVector::from(random_vector(&mut rng, n, 0.5, 5_f64));
        let b = DenseMatrix::from_data(constraints.clone()).multiply_vector(&point);
        // Nonnegative cost keeps the problem bounded
        let cost = random_vector(&mut rng, n, 0_f64, 10_f64);
        let problem = CanonicalForm::from_rows(cost, constraints, b.into_inner()).unwrap();

        let feasible = solve_two_phase(&problem).unwrap();
        assert!(problem.is_feasible(feasible.values(), 1e-6));

        let solution = solve(&problem).unwrap();
        assert!(problem.is_feasible(solution.values(), 1e-6));
        assert!(solution.objective_value() <= problem.objective_value(&point) + 1e-6);
        assert_abs_diff_eq!(solution.objective_value(), problem.objective_value(solution.values()), epsilon = 1e-9);

        if feasible.removed_rows().is_empty() {
            let costs = reduced_costs(&problem, solution.basis()).unwrap();
            assert!(costs.iter().all(|&cost| cost >= -1e-6), "not optimal: {}", costs);
            let recomputed = basic_solution(&problem, solution.basis()).unwrap();
            for (value, expected) in solution.values().iter().zip(recomputed.iter()) {
                assert_abs_diff_eq!(*value, *expected, epsilon = 1e-6);
            }
            for (j, value) in solution.values().iter().enumerate() {
                if !solution.basis().contains(&j) {
                    assert_eq!(*value, 0_f64);
                }
            }
        }
    }
}

#[test]
fn dual_agrees_with_two_phase() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let m = rng.gen_range(2..6);
        let n = rng.gen_range(2..6);
        // Covering constraints `Gx >= h` with positive data are feasible and, with a positive cost,
        // bounded. Written as `-Gx + s = -h` such that the slack basis is dual feasible.
        let covering = random_matrix(&mut rng, m, n, 1_f64, 10_f64);
        let h = random_vector(&mut rng, m, 1_f64, 10_f64);
        let mut cost = random_vector(&mut rng, n, 1_f64, 10_f64);
        cost.extend(std::iter::repeat_n(0_f64, m));
        let constraints = covering.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let mut row = row.into_iter().map(|value| -value).collect::<Vec<_>>();
                row.extend((0..m).map(|k| if k == i { 1_f64 } else { 0_f64 }));
                row
            })
            .collect();
        let b = h.into_iter().map(|value| -value).collect();
        let problem = CanonicalForm::from_rows(cost, constraints, b).unwrap();

        let slack_basis = (n..n + m).collect();
        let dual = solve_dual(&problem, slack_basis, None).unwrap();
        let primal = solve(&problem).unwrap();

        assert!(problem.is_feasible(dual.values(), 1e-6));
        assert_abs_diff_eq!(dual.objective_value(), primal.objective_value(), epsilon = 1e-6);
    }
}
