//! # Problem data in memory
//!
//! Dense linear algebra and the linear program representations built on it. State that only lives
//! during a solve, like the basis inverse, is kept in `algorithm`.
pub mod linear_algebra;
pub mod linear_program;
