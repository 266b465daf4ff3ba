//! # Linear algebra primitives
//!
//! Dense matrices and vectors, and the few operations on them that the simplex methods need.
pub mod matrix;
pub mod vector;

/// Values with an absolute value below this bound (relative to the scale of the data they come
/// from) are treated as zero by the matrix primitives.
pub const EPSILON: f64 = 1e-10;
