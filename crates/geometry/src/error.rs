use thiserror::Error;

/// Every way a matrix operation can fail.
///
/// All variants are raised immediately and propagated to the caller; nothing in
/// this crate recovers from them internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("flat index {index} out of range for matrix of length {len}")]
    FlatIndexOutOfRange { index: usize, len: usize },

    /// Scalar division below the type's divisor threshold, or an inverse of a
    /// matrix whose determinant is exactly zero.
    #[error("division by zero (divisor {divisor:e})")]
    DivideByZero { divisor: f64 },

    #[error("cannot {op} a {}x{} matrix with a {}x{} matrix", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("{rows}x{cols} matrix has more entries than fit in usize")]
    ShapeOverflow { rows: usize, cols: usize },

    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("rotation axis has zero length")]
    DegenerateAxis,
}

pub type Result<T> = std::result::Result<T, MatrixError>;
