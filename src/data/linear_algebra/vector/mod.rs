//! # Vector types for linear programs
//!
//! Only dense vectors are needed: all problem data is stored densely.
pub use dense::DenseVector;

mod dense;
