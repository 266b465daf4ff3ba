//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the revised simplex method. A
//! problem without a known feasible basis is solved in two phases: the first phase finds a basis
//! using artificial variables, the second phase optimizes the original objective from there.
use log::info;

use crate::algorithm::SolverConfig;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::inverse_maintenance::InverseMaintenance;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::canonical_form::CanonicalForm;
use crate::data::linear_program::solution::Solution;
use crate::error::Error;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;

/// Solve a problem in two phases.
///
/// The basis inverse is computed from scratch when the feasible basis is handed from the first
/// phase to the second.
///
/// # Return value
///
/// The optimal solution, `Error::Infeasible` or `Error::Unbounded`. The basis of the solution
/// has one index per row that remained after removing redundant rows.
pub fn solve<IM, PR>(problem: &CanonicalForm, config: &SolverConfig) -> Result<Solution, Error>
where
    IM: InverseMaintenance,
    PR: PivotRule,
{
    let FeasibleBasis { problem: reduced, basis, rank, .. } = phase_one::feasible_basis::<IM, PR>(problem, config)?;
    if let Rank::Deficient(rows) = &rank {
        info!("solving without redundant rows {:?}", rows);
    }

    phase_two::solve_from_basis::<IM, PR>(&reduced, basis, config)
}

/// Result of the first phase: a basis whose basic solution is feasible.
#[derive(Clone, Debug, PartialEq)]
pub struct FeasibleBasis {
    /// Problem that the basis belongs to.
    ///
    /// Equivalent to the original problem: rows with a negative right-hand side are negated and
    /// redundant rows are removed.
    problem: CanonicalForm,
    /// Basis indices, one per row of `problem`.
    basis: Vec<usize>,
    /// Value of every variable, nonnegative and zero outside of the basis.
    values: DenseVector,
    /// Whether rows were removed.
    rank: Rank,
}

impl FeasibleBasis {
    /// Create a new instance.
    pub fn new(problem: CanonicalForm, basis: Vec<usize>, values: DenseVector, rank: Rank) -> Self {
        debug_assert_eq!(basis.len(), problem.nr_rows());
        debug_assert_eq!(values.len(), problem.nr_columns());

        Self { problem, basis, values, rank }
    }

    /// Problem that the basis belongs to.
    pub fn problem(&self) -> &CanonicalForm {
        &self.problem
    }

    /// Basis indices, one per row of `problem()`.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// The feasible basic solution.
    pub fn values(&self) -> &DenseVector {
        &self.values
    }

    /// Whether rows were removed, and which.
    pub fn rank(&self) -> &Rank {
        &self.rank
    }

    /// Original indices of the rows that were removed as redundant.
    pub fn removed_rows(&self) -> &[usize] {
        match &self.rank {
            Rank::Full => &[],
            Rank::Deficient(rows) => rows,
        }
    }

    /// Split into problem, basis and values.
    pub fn into_parts(self) -> (CanonicalForm, Vec<usize>, DenseVector) {
        (self.problem, self.basis, self.values)
    }
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}
