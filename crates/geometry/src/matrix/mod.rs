//! Dense row-major matrices.
//! Element at (row, col) lives at flat index `row * cols + col`.
//!
//! `Matrix<R, C>` carries everything that is the same for every fixed size.
//! Size-specific numerics live next to their alias: `mat3.rs` (determinant,
//! inverse) and `mat4.rs` (minor expansion, transform builders). `MatrixN` in
//! `dynamic.rs` picks its shape at runtime.

mod dynamic;
mod mat3;
mod mat4;

pub use dynamic::MatrixN;
pub use mat3::{Matrix3, NEAR_ZERO_DIVISOR};
pub use mat4::Matrix4;

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MatrixError, Result};

/// How a flat input sequence is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    RowMajor,
    /// Consecutive values walk down a column. Transposed into row-major
    /// storage on construction.
    ColumnMajor,
}

// ─── Storage ──────────────────────────────────────────────────────────────────

/// Fixed-size `R`×`C` matrix of `f64`, stored contiguously in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    data: [[f64; C]; R],
}

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub const fn zeros() -> Self {
        Self { data: [[0.0; C]; R] }
    }

    /// Build from a two-dimensional array indexed `[row][col]`.
    pub const fn from_rows(data: [[f64; C]; R]) -> Self {
        Self { data }
    }

    /// Build from exactly `R * C` values laid out as `order` says.
    pub fn from_slice(values: &[f64], order: Order) -> Result<Self> {
        if values.len() != R * C {
            return Err(MatrixError::LengthMismatch { expected: R * C, actual: values.len() });
        }
        let mut m = Self::zeros();
        for i in 0..R {
            for j in 0..C {
                m.data[i][j] = match order {
                    Order::RowMajor    => values[i * C + j],
                    Order::ColumnMajor => values[j * R + i],
                };
            }
        }
        Ok(m)
    }

    pub fn from_row_major(values: &[f64]) -> Result<Self> {
        Self::from_slice(values, Order::RowMajor)
    }

    pub fn from_column_major(values: &[f64]) -> Result<Self> {
        Self::from_slice(values, Order::ColumnMajor)
    }

    #[inline] pub const fn rows(&self) -> usize { R }
    #[inline] pub const fn cols(&self) -> usize { C }
    #[inline] pub const fn len(&self) -> usize { R * C }
    #[inline] pub const fn is_empty(&self) -> bool { R * C == 0 }

    /// Read-only row-major view of the backing storage.
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_flattened()
    }

    /// Owned row-major copy of the backing storage.
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    // ─── Checked access ───────────────────────────────────────────────────────

    fn check(row: usize, col: usize) -> Result<()> {
        if row < R && col < C {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfRange { row, col, rows: R, cols: C })
        }
    }

    fn check_flat(index: usize) -> Result<()> {
        if index < R * C {
            Ok(())
        } else {
            Err(MatrixError::FlatIndexOutOfRange { index, len: R * C })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        Self::check(row, col)?;
        Ok(self.data[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        Self::check(row, col)?;
        self.data[row][col] = value;
        Ok(())
    }

    pub fn get_flat(&self, index: usize) -> Result<f64> {
        Self::check_flat(index)?;
        Ok(self.as_slice()[index])
    }

    pub fn set_flat(&mut self, index: usize, value: f64) -> Result<()> {
        Self::check_flat(index)?;
        self.data.as_flattened_mut()[index] = value;
        Ok(())
    }

    // ─── Numerics ─────────────────────────────────────────────────────────────

    pub fn transpose(&self) -> Matrix<C, R> {
        let mut t = Matrix::<C, R>::zeros();
        for i in 0..R {
            for j in 0..C {
                t.data[j][i] = self.data[i][j];
            }
        }
        t
    }

    /// Sum of the leading diagonal, `min(R, C)` terms.
    pub fn trace(&self) -> f64 {
        (0..R.min(C)).map(|i| self.data[i][i]).sum()
    }

    fn map(mut self, f: impl Fn(f64) -> f64) -> Self {
        for v in self.data.as_flattened_mut() { *v = f(*v); }
        self
    }

    fn zip_with(mut self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        for (a, b) in self.data.as_flattened_mut().iter_mut().zip(other.as_slice()) {
            *a = f(*a, *b);
        }
        self
    }

    /// Divide every entry, after the caller has applied its own divisor guard.
    fn div_unchecked(self, factor: f64) -> Self {
        self.map(|v| v / factor)
    }
}

impl<const N: usize> Matrix<N, N> {
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = 1.0;
        }
        m
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix<R, C> {
    fn from(data: [[f64; C]; R]) -> Self {
        Self::from_rows(data)
    }
}

// ─── Indexing ─────────────────────────────────────────────────────────────────

impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        if let Err(e) = Self::check(row, col) { panic!("{e}") }
        &self.data[row][col]
    }
}

impl<const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        if let Err(e) = Self::check(row, col) { panic!("{e}") }
        &mut self.data[row][col]
    }
}

impl<const R: usize, const C: usize> Index<usize> for Matrix<R, C> {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        if let Err(e) = Self::check_flat(index) { panic!("{e}") }
        &self.as_slice()[index]
    }
}

impl<const R: usize, const C: usize> IndexMut<usize> for Matrix<R, C> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        if let Err(e) = Self::check_flat(index) { panic!("{e}") }
        &mut self.data.as_flattened_mut()[index]
    }
}

// ─── Operators ────────────────────────────────────────────────────────────────

impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<const R: usize, const C: usize> Neg for Matrix<R, C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<const R: usize, const C: usize> Mul<f64> for Matrix<R, C> {
    type Output = Self;
    fn mul(self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }
}

impl<const R: usize, const C: usize> Mul<Matrix<R, C>> for f64 {
    type Output = Matrix<R, C>;
    fn mul(self, m: Matrix<R, C>) -> Matrix<R, C> {
        m * self
    }
}

impl<const R: usize, const K: usize, const C: usize> Mul<Matrix<K, C>> for Matrix<R, K> {
    type Output = Matrix<R, C>;
    fn mul(self, rhs: Matrix<K, C>) -> Matrix<R, C> {
        let mut c = Matrix::<R, C>::zeros();
        for i in 0..R {
            for j in 0..C {
                for k in 0..K {
                    c.data[i][j] += self.data[i][k] * rhs.data[k][j];
                }
            }
        }
        c
    }
}

// ─── Formatting & comparison ──────────────────────────────────────────────────

impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.as_slice(), C)
    }
}

/// One bracketed row per line. Shared with `MatrixN`.
pub(crate) fn write_rows(f: &mut fmt::Formatter<'_>, data: &[f64], cols: usize) -> fmt::Result {
    if cols == 0 {
        return Ok(());
    }
    for (i, row) in data.chunks(cols).enumerate() {
        if i > 0 { writeln!(f)?; }
        write!(f, "[")?;
        for (j, v) in row.iter().enumerate() {
            if j > 0 { write!(f, ", ")?; }
            write!(f, "{v}")?;
        }
        write!(f, "]")?;
    }
    Ok(())
}

impl<const R: usize, const C: usize> AbsDiffEq for Matrix<R, C> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.as_slice().iter().zip(other.as_slice()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const R: usize, const C: usize> RelativeEq for Matrix<R, C> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_square_transpose_swaps_shape() {
        let m = Matrix::<2, 3>::from_rows([[1., 2., 3.], [4., 5., 6.]]);
        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.as_slice(), &[1., 4., 2., 5., 3., 6.]);
    }

    #[test]
    fn non_square_product_shape() {
        let a = Matrix::<2, 3>::from_rows([[1., 2., 3.], [4., 5., 6.]]);
        let b = Matrix::<3, 1>::from_rows([[1.], [1.], [1.]]);
        let c = a * b;
        assert_eq!(c.as_slice(), &[6., 15.]);
    }

    #[test]
    fn non_square_trace_uses_shorter_side() {
        let m = Matrix::<2, 3>::from_rows([[1., 9., 9.], [9., 2., 9.]]);
        assert_eq!(m.trace(), 3.0);
    }

    #[test]
    fn display_one_row_per_line() {
        let m = Matrix::<2, 2>::from_rows([[1., 2.], [3., 4.]]);
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
    }
}
