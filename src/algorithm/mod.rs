//! # Algorithms
//!
//! The primal simplex method with its two phase bootstrap lives in `two_phase`, the dual simplex
//! method in `dual`. The functions in this module are the entry points with default settings.
use crate::algorithm::two_phase::FeasibleBasis;
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::algorithm::two_phase::tableau::inverse_maintenance::ProductForm;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::error::Error;

pub mod dual;
pub mod two_phase;
pub mod utilities;

/// Settings shared by all solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Values with a smaller absolute value are treated as zero in pricing, ratio tests and
    /// feasibility checks.
    pub epsilon: f64,
    /// Number of iterations between two progress messages at the `debug` log level. Zero disables
    /// them.
    pub log_interval: usize,
}

impl SolverConfig {
    /// Replace the tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        debug_assert!(epsilon >= 0_f64);

        self.epsilon = epsilon;
        self
    }

    /// Replace the number of iterations between progress messages.
    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = log_interval;
        self
    }

    /// Whether a progress message should be logged after this many iterations.
    pub(crate) fn should_log(&self, iteration: usize) -> bool {
        self.log_interval > 0 && iteration % self.log_interval == 0
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-9,
            log_interval: 1000,
        }
    }
}

/// A problem formulation of which a relaxation can be solved.
pub trait SolveRelaxation {
    /// Solve the problem from scratch, without a known basis.
    ///
    /// # Return value
    ///
    /// An optimal solution, or the reason why there is none.
    fn solve_relaxation(&self) -> Result<Solution, Error>;
}

impl SolveRelaxation for CanonicalForm {
    fn solve_relaxation(&self) -> Result<Solution, Error> {
        solve(self)
    }
}

/// Optimize starting from a primal feasible basis.
///
/// # Arguments
///
/// * `problem`: Problem to solve.
/// * `basis`: One column index per row, such that the basic solution is nonnegative.
///
/// # Return value
///
/// The optimal solution, or `Error::Unbounded`.
pub fn solve_primal(problem: &CanonicalForm, basis: Vec<usize>) -> Result<Solution, Error> {
    two_phase::phase_two::solve_from_basis::<ProductForm, FirstProfitable>(
        problem, basis, &SolverConfig::default(),
    )
}

/// Find a feasible basis using artificial variables.
///
/// # Return value
///
/// A feasible basis, or `Error::Infeasible`.
pub fn solve_two_phase(problem: &CanonicalForm) -> Result<FeasibleBasis, Error> {
    two_phase::phase_one::feasible_basis::<ProductForm, FirstProfitable>(problem, &SolverConfig::default())
}

/// Optimize starting from a dual feasible basis using the dual simplex method.
///
/// # Arguments
///
/// * `problem`: Problem to solve.
/// * `basis`: One column index per row, such that no relative cost is negative.
/// * `y`: Simplex multipliers of the basis, computed from the basis if not provided.
///
/// # Return value
///
/// The optimal solution, or `Error::Infeasible`.
pub fn solve_dual(
    problem: &CanonicalForm,
    basis: Vec<usize>,
    y: Option<DenseVector>,
) -> Result<Solution, Error> {
    dual::dual(problem, basis, y, &SolverConfig::default())
}

/// Solve a problem without a known basis: find a feasible basis, then optimize from it.
pub fn solve(problem: &CanonicalForm) -> Result<Solution, Error> {
    two_phase::solve::<ProductForm, FirstProfitable>(problem, &SolverConfig::default())
}
