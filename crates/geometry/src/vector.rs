//! Minimal 3-component vector consumed by the transform builders.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MatrixError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    data: [f64; 3],
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline] pub fn x(&self) -> f64 { self.data[0] }
    #[inline] pub fn y(&self) -> f64 { self.data[1] }
    #[inline] pub fn z(&self) -> f64 { self.data[2] }

    /// Checked component read.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(MatrixError::FlatIndexOutOfRange { index, len: 3 })
    }

    /// Euclidean length. Computed with `hypot` so that finite components never
    /// overflow to infinity or underflow to zero when squared.
    pub fn norm(&self) -> f64 {
        self.x().hypot(self.y()).hypot(self.z())
    }

    /// Scale to unit length in place. A zero-length vector is left unchanged.
    pub fn normalize(&mut self) {
        let n = self.norm();
        if n > 0.0 {
            for c in self.data.iter_mut() { *c /= n; }
        }
    }

    /// Unit-length copy; `self` is untouched.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    pub fn to_array(self) -> [f64; 3] {
        self.data
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(data: [f64; 3]) -> Self {
        Self { data }
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: f64) -> Vector3 {
        Vector3::new(self.x() * s, self.y() * s, self.z() * s)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.data.iter().zip(other.data.iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
