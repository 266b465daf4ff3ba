//! # Matrix implementation
//!
//! A row major dense matrix with the operations used by the simplex methods: element, row and
//! column access, products with vectors and inversion.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter::repeat_n;

use index_utils::remove_indices;
use itertools::Itertools;

use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::vector::DenseVector;
use crate::error::Error;

/// Uses a `Vec<Vec<f64>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a `DenseMatrix` from row major data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of equal length.
    ///
    /// # Panics
    ///
    /// If the rows don't all have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Self {
        let nr_columns = data.first().map_or(0, Vec::len);
        assert!(
            data.iter().all(|row| row.len() == nr_columns),
            "Row lengths not equal: first row has length {}", nr_columns,
        );

        Self { nr_rows: data.len(), nr_columns, data }
    }

    /// Create a matrix from rows, where the number of columns is known independently of the number
    /// of rows (which may be zero).
    pub fn from_rows(data: Vec<Vec<f64>>, nr_columns: usize) -> Self {
        assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { nr_rows: data.len(), nr_columns, data }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let data = (0..len)
            .map(|i| (0..len).map(|j| if i == j { 1_f64 } else { 0_f64 }).collect())
            .collect();

        Self { data, nr_rows: len, nr_columns: len }
    }

    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        let data = repeat_n(vec![0_f64; columns], rows).collect();

        Self { data, nr_rows: rows, nr_columns: columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> DenseVector {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Change column `j` to the provided `values`.
    pub fn set_column(&mut self, j: usize, values: &DenseVector) {
        debug_assert!(j < self.nr_columns);
        assert_eq!(values.len(), self.nr_rows);

        for (row, &value) in self.data.iter_mut().zip_eq(values.iter()) {
            row[j] = value;
        }
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value *= factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read_value = self.data[read_row][j];
            self.data[write_row][j] += factor * read_value;
        }
    }

    /// Swap two rows.
    pub fn swap_rows(&mut self, first: usize, second: usize) {
        debug_assert!(first < self.nr_rows);
        debug_assert!(second < self.nr_rows);

        self.data.swap(first, second);
    }

    /// Remove rows from the matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated row indices.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all(|&i| i < self.nr_rows));

        remove_indices(&mut self.data, indices);
        self.nr_rows = self.data.len();
    }

    /// Concatenate another matrix with the same number of rows to the right of this one.
    pub fn hcat(mut self, other: &DenseMatrix) -> Self {
        assert_eq!(self.nr_rows, other.nr_rows);

        for (row, other_row) in self.data.iter_mut().zip_eq(other.data.iter()) {
            row.extend_from_slice(other_row);
        }
        self.nr_columns += other.nr_columns;

        self
    }

    /// Square matrix formed by the columns at `indices`, in that order.
    ///
    /// This is how a basis matrix is built from a constraint matrix and the basis indices.
    pub fn select_columns(&self, indices: &[usize]) -> Self {
        debug_assert!(indices.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .map(|row| indices.iter().map(|&j| row[j]).collect())
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: indices.len() }
    }

    /// Matrix vector product `Ax`.
    ///
    /// # Panics
    ///
    /// If the length of `x` is not equal to the number of columns.
    pub fn multiply_vector(&self, x: &DenseVector) -> DenseVector {
        assert_eq!(x.len(), self.nr_columns);

        self.data.iter()
            .map(|row| row.iter().zip_eq(x.iter()).map(|(a, b)| a * b).sum::<f64>())
            .collect()
    }

    /// Vector matrix product `yᵗA`, treating `y` as a row vector.
    ///
    /// # Panics
    ///
    /// If the length of `y` is not equal to the number of rows.
    pub fn left_multiply_vector(&self, y: &DenseVector) -> DenseVector {
        assert_eq!(y.len(), self.nr_rows);

        let mut result = DenseVector::zeros(self.nr_columns);
        for (row, &factor) in self.data.iter().zip_eq(y.iter()) {
            if factor != 0_f64 {
                for (total, value) in result.iter_mut().zip_eq(row.iter()) {
                    *total += factor * value;
                }
            }
        }

        result
    }

    /// Matrix product `self * other`.
    pub fn multiply(&self, other: &DenseMatrix) -> DenseMatrix {
        assert_eq!(self.nr_columns, other.nr_rows);

        let data = self.data.iter()
            .map(|row| {
                (0..other.nr_columns)
                    .map(|j| row.iter().enumerate().map(|(k, value)| value * other.data[k][j]).sum())
                    .collect()
            })
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: other.nr_columns }
    }

    /// Compute the inverse of a square matrix.
    ///
    /// Gauss-Jordan elimination with partial pivoting. A pivot that is zero relative to the
    /// largest absolute value in the matrix means that the matrix is singular.
    ///
    /// # Return value
    ///
    /// The inverse, or `Error::SingularMatrix` if no usable pivot could be found for some column.
    ///
    /// # Panics
    ///
    /// If the matrix is not square.
    pub fn invert(&self) -> Result<DenseMatrix, Error> {
        assert_eq!(self.nr_rows, self.nr_columns, "Only square matrices can be inverted");

        let size = self.nr_rows;
        let threshold = EPSILON * self.max_abs().max(1_f64);
        let mut work = self.clone();
        let mut inverse = Self::identity(size);

        for column in 0..size {
            let mut pivot_row = column;
            for i in (column + 1)..size {
                if work.data[i][column].abs() > work.data[pivot_row][column].abs() {
                    pivot_row = i;
                }
            }
            let pivot_value = work.data[pivot_row][column];
            if pivot_value.abs() <= threshold {
                return Err(Error::SingularMatrix);
            }

            if pivot_row != column {
                work.swap_rows(column, pivot_row);
                inverse.swap_rows(column, pivot_row);
            }
            work.multiply_row(column, 1_f64 / pivot_value);
            inverse.multiply_row(column, 1_f64 / pivot_value);

            for i in 0..size {
                let factor = work.data[i][column];
                if i != column && factor != 0_f64 {
                    work.mul_add_rows(column, i, -factor);
                    inverse.mul_add_rows(column, i, -factor);
                }
            }
        }

        Ok(inverse)
    }

    /// Largest absolute value of any element, zero for an empty matrix.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().flatten().fold(0_f64, |maximum, value| maximum.max(value.abs()))
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl Display for DenseMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let formatted = self.data.iter()
            .map(|row| row.iter().map(|value| format!("{:.4}", value)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = formatted.iter().flatten().map(String::len).max().unwrap_or(0);

        for row in formatted {
            writeln!(f, "{}", row.iter().map(|value| format!("{:>width$}", value, width = width)).join(" "))?;
        }

        Ok(())
    }
}
