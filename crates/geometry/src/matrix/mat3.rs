//! 3×3 matrices: division guarded at 1e-6, row-0 determinant, adjugate inverse.

use super::Matrix;
use crate::error::{MatrixError, Result};
use crate::vector::Vector3;

pub type Matrix3 = Matrix<3, 3>;

/// Smallest divisor magnitude `Matrix3::try_div` accepts.
pub const NEAR_ZERO_DIVISOR: f64 = 1e-6;

impl Matrix<3, 3> {
    /// Divide every entry by `factor`. Fails when `|factor| < 1e-6`.
    pub fn try_div(&self, factor: f64) -> Result<Self> {
        if factor.abs() < NEAR_ZERO_DIVISOR {
            log::debug!("mat3 division rejected: |{factor:e}| below {NEAR_ZERO_DIVISOR:e}");
            return Err(MatrixError::DivideByZero { divisor: factor });
        }
        Ok(self.div_unchecked(factor))
    }

    /// Cofactor expansion along row 0.
    pub fn determinant(&self) -> f64 {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
      - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
      + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Adjugate divided by the determinant.
    ///
    /// Singularity is an exact test: only a determinant of exactly `0.0` is
    /// rejected here. The division then goes through [`try_div`](Self::try_div),
    /// so a determinant below [`NEAR_ZERO_DIVISOR`] is rejected as well.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 {
            log::debug!("mat3 is singular (determinant is zero)");
            return Err(MatrixError::DivideByZero { divisor: det });
        }
        let m = &self.data;
        let adj = Self::from_rows([
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                m[0][1] * m[2][0] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ]);
        adj.try_div(det)
    }

    pub fn mul_vec(&self, v: Vector3) -> Vector3 {
        let m = &self.data;
        Vector3::new(
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        )
    }
}
