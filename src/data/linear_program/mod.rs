//! # Representing linear programs
//!
//! Problems are stored in canonical form: equality constraints only, nonnegative variables.
pub mod canonical_form;
pub mod solution;
