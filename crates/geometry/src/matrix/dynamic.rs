//! General `rows`×`cols` matrix whose shape is chosen at runtime.
//!
//! Only basic algebra lives here. There is no general determinant or inverse.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MatrixError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixN {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl MatrixN {
    fn checked_len(rows: usize, cols: usize) -> Result<usize> {
        rows.checked_mul(cols).ok_or(MatrixError::ShapeOverflow { rows, cols })
    }

    /// Zero-filled `rows`×`cols` matrix.
    ///
    /// # Panics
    ///
    /// When `rows * cols` overflows `usize`. Use [`try_new`](Self::try_new) to
    /// get [`MatrixError::ShapeOverflow`] instead.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self { rows, cols, data: vec![0.0; len] })
    }

    /// Take ownership of `rows * cols` row-major values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let expected = Self::checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(MatrixError::LengthMismatch { expected, actual: data.len() });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn from_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Ones on the leading diagonal, `min(rows, cols)` of them.
    pub fn identity(rows: usize, cols: usize) -> Self {
        let mut m = Self::new(rows, cols);
        for i in 0..rows.min(cols) {
            m.data[i * cols + i] = 1.0;
        }
        m
    }

    #[inline] pub fn rows(&self) -> usize { self.rows }
    #[inline] pub fn cols(&self) -> usize { self.cols }
    #[inline] pub fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }
    #[inline] pub fn len(&self) -> usize { self.data.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    // ─── Checked access ───────────────────────────────────────────────────────

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(MatrixError::IndexOutOfRange { row, col, rows: self.rows, cols: self.cols })
        }
    }

    fn check_flat(&self, index: usize) -> Result<()> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(MatrixError::FlatIndexOutOfRange { index, len: self.data.len() })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        Ok(self.data[self.offset(row, col)?])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let i = self.offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    pub fn get_flat(&self, index: usize) -> Result<f64> {
        self.check_flat(index)?;
        Ok(self.data[index])
    }

    pub fn set_flat(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_flat(index)?;
        self.data[index] = value;
        Ok(())
    }

    // ─── Algebra ──────────────────────────────────────────────────────────────

    fn same_shape(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            log::debug!("matrix {op} rejected: {:?} vs {:?}", self.shape(), other.shape());
            Err(MatrixError::DimensionMismatch { op, lhs: self.shape(), rhs: other.shape() })
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self { rows: self.rows, cols: self.cols, data: self.data.iter().map(|&v| f(v)).collect() }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let data = self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect();
        Self { rows: self.rows, cols: self.cols, data }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.same_shape(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.same_shape(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Matrix product. `self.cols()` must equal `other.rows()`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            log::debug!("matrix multiply rejected: {:?} vs {:?}", self.shape(), other.shape());
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let mut out = Self::new(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                for k in 0..self.cols {
                    out.data[i * other.cols + j] +=
                        self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
            }
        }
        Ok(out)
    }

    /// Divide every entry by `factor`. Only an exact `0.0` is rejected.
    pub fn try_div(&self, factor: f64) -> Result<Self> {
        if factor == 0.0 {
            log::debug!("matrix division by zero rejected");
            return Err(MatrixError::DivideByZero { divisor: factor });
        }
        Ok(self.map(|v| v / factor))
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        t
    }

    /// Sum of the leading diagonal, `min(rows, cols)` terms.
    pub fn trace(&self) -> f64 {
        (0..self.rows.min(self.cols)).map(|i| self.data[i * self.cols + i]).sum()
    }
}

// ─── Indexing ─────────────────────────────────────────────────────────────────

impl Index<(usize, usize)> for MatrixN {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.offset(row, col) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<(usize, usize)> for MatrixN {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.offset(row, col) {
            Ok(i) => &mut self.data[i],
            Err(e) => panic!("{e}"),
        }
    }
}

impl Index<usize> for MatrixN {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        if let Err(e) = self.check_flat(index) { panic!("{e}") }
        &self.data[index]
    }
}

impl IndexMut<usize> for MatrixN {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        if let Err(e) = self.check_flat(index) { panic!("{e}") }
        &mut self.data[index]
    }
}

// ─── Operators ────────────────────────────────────────────────────────────────

impl Mul<f64> for &MatrixN {
    type Output = MatrixN;
    fn mul(self, factor: f64) -> MatrixN {
        self.map(|v| v * factor)
    }
}

impl Mul<f64> for MatrixN {
    type Output = MatrixN;
    fn mul(self, factor: f64) -> MatrixN {
        &self * factor
    }
}

impl Mul<&MatrixN> for f64 {
    type Output = MatrixN;
    fn mul(self, m: &MatrixN) -> MatrixN {
        m * self
    }
}

impl Mul<MatrixN> for f64 {
    type Output = MatrixN;
    fn mul(self, m: MatrixN) -> MatrixN {
        &m * self
    }
}

impl Neg for &MatrixN {
    type Output = MatrixN;
    fn neg(self) -> MatrixN {
        self.map(|v| -v)
    }
}

impl Neg for MatrixN {
    type Output = MatrixN;
    fn neg(self) -> MatrixN {
        -&self
    }
}

// ─── Formatting & comparison ──────────────────────────────────────────────────

impl fmt::Display for MatrixN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::write_rows(f, &self.data, self.cols)
    }
}

impl AbsDiffEq for MatrixN {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for MatrixN {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
