//! # Strategies
//!
//! Decisions that the simplex method leaves open, like which column enters the basis.
pub mod pivot_rule;
