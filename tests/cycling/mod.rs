//! # Degenerate problems
//!
//! Beale's example cycles forever under the largest coefficient rule. The lowest index rule must
//! reach the optimum.
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use revised_simplex::algorithm::utilities::reduced_costs;
use revised_simplex::data::linear_program::canonical_form::CanonicalForm;
use revised_simplex::{solve, solve_primal};

use super::init_logging;

fn beale() -> CanonicalForm {
    CanonicalForm::from_rows(
        vec![0_f64, 0_f64, 0_f64, -0.75, 20_f64, -0.5, 6_f64],
        vec![
            vec![1_f64, 0_f64, 0_f64, 0.25, -8_f64, -1_f64, 9_f64],
            vec![0_f64, 1_f64, 0_f64, 0.5, -12_f64, -0.5, 3_f64],
            vec![0_f64, 0_f64, 1_f64, 0_f64, 0_f64, 1_f64, 0_f64],
        ],
        vec![0_f64, 0_f64, 1_f64],
    ).unwrap()
}

#[test]
fn beale_from_slack_basis() {
    init_logging();

    let problem = beale();
    let solution = solve_primal(&problem, vec![0, 1, 2]).unwrap();

    assert_abs_diff_eq!(solution.objective_value(), -1.25, epsilon = 1e-9);
    let expected = [0.75, 0_f64, 0_f64, 1_f64, 0_f64, 1_f64, 0_f64];
    for (value, expected) in solution.values().iter().zip(expected) {
        assert_abs_diff_eq!(*value, expected, epsilon = 1e-9);
    }
    assert!(problem.is_feasible(solution.values(), 1e-9));
}

#[test]
fn beale_two_phase() {
    init_logging();

    let problem = beale();
    let solution = solve(&problem).unwrap();

    assert_abs_diff_eq!(solution.objective_value(), -1.25, epsilon = 1e-9);
    assert!(problem.is_feasible(solution.values(), 1e-9));
}

#[test]
fn degenerate_vertex_with_many_ties() {
    init_logging();

    // Every slack is zero at the start and every ratio is zero
    let problem = CanonicalForm::from_rows(
        vec![-1_f64, -1_f64, 0_f64, 0_f64, 0_f64],
        vec![
            vec![1_f64, -1_f64, 1_f64, 0_f64, 0_f64],
            vec![-1_f64, 1_f64, 0_f64, 1_f64, 0_f64],
            vec![1_f64, 1_f64, 0_f64, 0_f64, 1_f64],
        ],
        vec![0_f64, 0_f64, 2_f64],
    ).unwrap();
    let solution = solve_primal(&problem, vec![2, 3, 4]).unwrap();

    assert_abs_diff_eq!(solution.objective_value(), -2_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.values()[0], 1_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.values()[1], 1_f64, epsilon = 1e-9);
}

/// Number of ways to choose `k` out of `n`, which bounds the number of distinct bases.
fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |total, i| total * (n - i) / (i + 1))
}

#[test]
fn no_basis_is_visited_twice_without_degeneracy() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(271_828);

    for _ in 0..50 {
        let m = rng.gen_range(2..6);
        let nr_structural = rng.gen_range(1..5);
        let n = nr_structural + m;

        // Positive coefficients bound the feasible region, a random positive right-hand side
        // makes every basis met along the way nondegenerate almost surely
        let constraints = (0..m)
            .map(|i| {
                let mut row = (0..nr_structural).map(|_| rng.gen_range(1_f64..10_f64)).collect::<Vec<_>>();
                row.extend((0..m).map(|k| if k == i { 1_f64 } else { 0_f64 }));
                row
            })
            .collect();
        let b = (0..m).map(|_| rng.gen_range(1_f64..10_f64)).collect();
        let mut cost = (0..nr_structural).map(|_| rng.gen_range(-10_f64..0_f64)).collect::<Vec<_>>();
        cost.extend(std::iter::repeat_n(0_f64, m));
        let problem = CanonicalForm::from_rows(cost, constraints, b).unwrap();

        let solution = solve_primal(&problem, (nr_structural..n).collect()).unwrap();

        assert!(solution.iterations() >= 1);
        assert!(
            solution.iterations() <= binomial(n, m),
            "{} iterations for {} rows and {} columns", solution.iterations(), m, n,
        );
        let costs = reduced_costs(&problem, solution.basis()).unwrap();
        assert!(costs.iter().all(|&cost| cost >= -1e-9));
    }
}

#[test]
fn binomial_coefficients() {
    assert_eq!(binomial(4, 2), 6);
    assert_eq!(binomial(7, 3), 35);
    assert_eq!(binomial(5, 0), 1);
}
