//! # Errors
//!
//! Everything that can stop a solve before an optimum is found.
use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// Reasons for which a solver can not return an optimal solution.
///
/// `Unbounded` and `Infeasible` are regular outcomes of a solve, the other variants indicate a
/// problem with the input or with the numerical state of the basis.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A basis matrix has no (numerically usable) inverse.
    SingularMatrix,
    /// The objective can be decreased without limit.
    Unbounded,
    /// There is no point satisfying all constraints.
    Infeasible,
    /// The dimensions of the problem data don't agree.
    DimensionMismatch(String),
    /// A basis supplied by the caller can't be used to start the requested method.
    InvalidBasis(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Error::SingularMatrix => f.write_str("basis matrix is singular"),
            Error::Unbounded => f.write_str("problem is unbounded"),
            Error::Infeasible => f.write_str("problem is infeasible"),
            Error::DimensionMismatch(description) => write!(f, "dimension mismatch: {}", description),
            Error::InvalidBasis(description) => write!(f, "invalid basis: {}", description),
        }
    }
}

impl StdError for Error {}
