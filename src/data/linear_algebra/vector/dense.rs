//! # Dense vector
//!
//! Wrapping a `Vec<f64>` such that it has a fixed length.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use index_utils::remove_indices;
use itertools::Itertools;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector {
    data: Vec<f64>,
}

impl DenseVector {
    /// Create a `DenseVector` from the provided data.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: f64, len: usize) -> Self {
        Self { data: vec![value; len] }
    }

    /// Vector of zeros of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self::constant(0_f64, len)
    }

    /// Inner product with another vector of the same length.
    ///
    /// # Panics
    ///
    /// If the lengths differ.
    pub fn inner_product(&self, other: &DenseVector) -> f64 {
        self.data.iter().zip_eq(other.data.iter())
            .map(|(left, right)| left * right)
            .sum()
    }

    /// Add a multiple of another vector to this one: `self += factor * other`.
    pub fn add_multiple(&mut self, factor: f64, other: &DenseVector) {
        for (value, other_value) in self.data.iter_mut().zip_eq(other.data.iter()) {
            *value += factor * other_value;
        }
    }

    /// Multiply every element with `factor`.
    pub fn scale(&mut self, factor: f64) {
        for value in &mut self.data {
            *value *= factor;
        }
    }

    /// Remove the elements at the given indices.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated indices within the length of this vector.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all(|&i| i < self.len()));

        remove_indices(&mut self.data, indices);
    }

    /// Sum of the absolute values of the elements.
    pub fn norm_1(&self) -> f64 {
        self.data.iter().map(|value| value.abs()).sum()
    }

    /// Largest absolute value, zero for an empty vector.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0_f64, |maximum, value| maximum.max(value.abs()))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    /// Iterate mutably over the values in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    /// View the underlying values.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Unwrap into the underlying values.
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl FromIterator<f64> for DenseVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for DenseVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl IndexMut<usize> for DenseVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len());

        &mut self.data[index]
    }
}

impl Display for DenseVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "[")?;
        write!(f, "{}", self.data.iter().map(|value| format!("{:.6}", value)).join(", "))?;
        write!(f, "]")
    }
}
