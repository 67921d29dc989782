//! 4×4 matrices: minor-based determinant and affine transform builders.
//!
//! Transforms act on column vectors, `p' = M * p`, with the translation in
//! column 3 and `(x, y, z, w)` homogeneous coordinates.

use super::{Matrix, Matrix3};
use crate::error::{MatrixError, Result};
use crate::vector::Vector3;

pub type Matrix4 = Matrix<4, 4>;

impl Matrix<4, 4> {
    /// Divide every entry by `factor`. Only an exact `0.0` is rejected.
    pub fn try_div(&self, factor: f64) -> Result<Self> {
        if factor == 0.0 {
            log::debug!("mat4 division by zero rejected");
            return Err(MatrixError::DivideByZero { divisor: factor });
        }
        Ok(self.div_unchecked(factor))
    }

    /// The 3×3 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix3> {
        Self::check(row, col)?;
        Ok(self.minor_at(row, col))
    }

    fn minor_at(&self, skip_row: usize, skip_col: usize) -> Matrix3 {
        let mut out = Matrix3::zeros();
        let rows = (0..4).filter(|&i| i != skip_row);
        for (r, i) in rows.enumerate() {
            let cols = (0..4).filter(|&j| j != skip_col);
            for (c, j) in cols.enumerate() {
                out.data[r][c] = self.data[i][j];
            }
        }
        out
    }

    /// Cofactor expansion along row 0 over four 3×3 minors.
    pub fn determinant(&self) -> f64 {
        (0..4).map(|j| {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            sign * self.data[0][j] * self.minor_at(0, j).determinant()
        }).sum()
    }

    pub fn mul_vec4(&self, v: [f64; 4]) -> [f64; 4] {
        let mut out = [0.0; 4];
        for (i, row) in self.data.iter().enumerate() {
            out[i] = row.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
        }
        out
    }

    /// Apply to a point (`w = 1`), dropping the resulting `w`.
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let [px, py, pz] = p.to_array();
        let [x, y, z, _] = self.mul_vec4([px, py, pz, 1.0]);
        Vector3::new(x, y, z)
    }

    /// Apply to a direction (`w = 0`), so translation has no effect.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let [vx, vy, vz] = v.to_array();
        let [x, y, z, _] = self.mul_vec4([vx, vy, vz, 0.0]);
        Vector3::new(x, y, z)
    }

    // ─── Transform builders ──────────────────────────────────────────────────

    pub fn translation(v: Vector3) -> Self {
        log::trace!("translation matrix for {v:?}");
        let mut m = Self::identity();
        for i in 0..3 {
            m.data[i][3] = v[i];
        }
        m
    }

    pub fn scaling(v: Vector3) -> Self {
        log::trace!("scaling matrix for {v:?}");
        let mut m = Self::identity();
        for i in 0..3 {
            m.data[i][i] = v[i];
        }
        m
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues form).
    ///
    /// `axis` is taken by value and normalized as a private copy; the caller's
    /// vector is never changed. A zero-length axis has no direction and is
    /// rejected with [`MatrixError::DegenerateAxis`].
    pub fn rotation(axis: Vector3, angle: f64) -> Result<Self> {
        if axis.norm() == 0.0 {
            log::debug!("rotation about zero-length axis rejected");
            return Err(MatrixError::DegenerateAxis);
        }
        log::trace!("rotation matrix for axis {axis:?}, angle {angle}");
        let axis = axis.normalized();
        let (x, y, z) = (axis[0], axis[1], axis[2]);
        let (sin, cos) = angle.sin_cos();
        let t = 1.0 - cos;

        Ok(Self::from_rows([
            [cos + x * x * t,     x * y * t - z * sin, x * z * t + y * sin, 0.],
            [y * x * t + z * sin, cos + y * y * t,     y * z * t - x * sin, 0.],
            [z * x * t - y * sin, z * y * t + x * sin, cos + z * z * t,     0.],
            [0.,                  0.,                  0.,                  1.],
        ]))
    }
}
