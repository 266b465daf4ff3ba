//! # Problems without an optimal solution and unusable input
use revised_simplex::data::linear_algebra::vector::DenseVector;
use revised_simplex::data::linear_program::canonical_form::CanonicalForm;
use revised_simplex::{solve, solve_dual, solve_primal, Error, SolveRelaxation};

use super::init_logging;

#[test]
fn infeasible() {
    init_logging();

    // x_0 + x_1 = 3 and x_0 + x_1 + x_2 = 1
    let problem = CanonicalForm::from_rows(
        vec![1_f64, 1_f64, 0_f64],
        vec![vec![1_f64, 1_f64, 0_f64], vec![1_f64, 1_f64, 1_f64]],
        vec![3_f64, 1_f64],
    ).unwrap();
    assert_eq!(solve(&problem), Err(Error::Infeasible));
    assert_eq!(problem.solve_relaxation(), Err(Error::Infeasible));
}

#[test]
fn unbounded() {
    init_logging();

    // minimize -x_0 subject to x_0 - x_1 + x_2 = 1
    let problem = CanonicalForm::from_rows(
        vec![-1_f64, 0_f64, 0_f64],
        vec![vec![1_f64, -1_f64, 1_f64]],
        vec![1_f64],
    ).unwrap();
    assert_eq!(solve_primal(&problem, vec![2]), Err(Error::Unbounded));
    assert_eq!(solve(&problem), Err(Error::Unbounded));
}

#[test]
fn dual_infeasible() {
    init_logging();

    // x_0 + x_1 = -1
    let problem = CanonicalForm::from_rows(
        vec![1_f64, 0_f64],
        vec![vec![1_f64, 1_f64]],
        vec![-1_f64],
    ).unwrap();
    assert_eq!(solve_dual(&problem, vec![1], None), Err(Error::Infeasible));
    assert_eq!(solve(&problem), Err(Error::Infeasible));
}

#[test]
fn bad_input() {
    let problem = CanonicalForm::from_rows(
        vec![1_f64, 1_f64, 0_f64],
        vec![vec![1_f64, 1_f64, 1_f64]],
        vec![1_f64],
    ).unwrap();

    assert!(matches!(solve_primal(&problem, vec![3]), Err(Error::InvalidBasis(_))));
    assert!(matches!(solve_primal(&problem, vec![0, 1]), Err(Error::InvalidBasis(_))));
    assert!(matches!(
        solve_dual(&problem, vec![2], Some(DenseVector::zeros(2))),
        Err(Error::DimensionMismatch(_)),
    ));

    // Not more columns than rows
    let square = CanonicalForm::from_rows(
        vec![1_f64, 1_f64],
        vec![vec![1_f64, 1_f64], vec![1_f64, 2_f64]],
        vec![1_f64, 3_f64],
    );
    assert!(matches!(square, Err(Error::DimensionMismatch(_))));

    let ragged = CanonicalForm::from_rows(
        vec![1_f64, 1_f64, 0_f64],
        vec![vec![1_f64, 1_f64, 1_f64], vec![1_f64]],
        vec![1_f64, 1_f64],
    );
    assert!(matches!(ragged, Err(Error::DimensionMismatch(_))));
}
