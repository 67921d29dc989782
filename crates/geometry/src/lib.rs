//! Dense `f64` matrices for geometric work.
//!
//! - [`Matrix3`] / [`Matrix4`]: fixed-size aliases of [`Matrix`], with closed-form
//!   determinants, a 3×3 inverse and 4×4 affine transform builders.
//! - [`MatrixN`]: shape chosen at runtime, basic algebra only.
//!
//! Every fallible operation returns [`MatrixError`]. The crate logs through the
//! `log` facade and never installs a logger itself.

pub mod error;
pub mod matrix;
pub mod vector;

pub use error::{MatrixError, Result};
pub use matrix::{Matrix, Matrix3, Matrix4, MatrixN, NEAR_ZERO_DIVISOR, Order};
pub use vector::Vector3;
