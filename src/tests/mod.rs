//! # Small problems with known solutions, used throughout the crate's tests.
//!
//! Convention for function names:
//!
//! * `fn create_problem()`
//! * `fn initial_basis()` (or another name describing the starting basis)
//! * `fn optimal_basis()`
//! * `const OPTIMAL_OBJECTIVE_VALUE`
