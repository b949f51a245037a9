//! Error types for rbd-spatial.

use std::fmt;

use thiserror::Error;

use crate::frame::Frame;
use crate::kind::{Kind, Operation};

/// Shape of a numeric buffer as rows x columns. Vectors are `n x 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Column vector of length `n`.
    pub const fn vector(n: usize) -> Self {
        Self { rows: n, cols: 1 }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialError {
    #[error("frames must match: {left} vs {right}")]
    FrameMismatch { left: Frame, right: Frame },

    #[error("{op} is not defined between {left} and {right}")]
    TypeMismatch {
        op: Operation,
        left: Kind,
        right: Kind,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    Dimension { expected: Shape, actual: Shape },

    #[error("{op} of {kind} is not supported")]
    Unsupported { op: Operation, kind: Kind },

    #[error("{kind} is singular and cannot be inverted")]
    Singular { kind: Kind },
}

pub type Result<T> = std::result::Result<T, SpatialError>;

/// Fails with [`SpatialError::FrameMismatch`] unless both frames are the same.
#[inline]
pub(crate) fn ensure_same_frame(left: Frame, right: Frame) -> Result<Frame> {
    if left == right {
        Ok(left)
    } else {
        Err(SpatialError::FrameMismatch { left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_both_operands() {
        let err = SpatialError::TypeMismatch {
            op: Operation::Mul,
            left: Kind::Wrench,
            right: Kind::Wrench,
        };
        assert_eq!(
            err.to_string(),
            "multiplication is not defined between Wrench and Wrench"
        );

        let err = SpatialError::Dimension {
            expected: Shape::vector(6),
            actual: Shape::vector(4),
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 6x1, got 4x1");
    }

    #[test]
    fn same_frame_check() {
        let a = Frame::with_id(7);
        assert_eq!(ensure_same_frame(a, Frame::with_id(7)), Ok(a));
        assert_eq!(
            ensure_same_frame(a, Frame::with_id(8)),
            Err(SpatialError::FrameMismatch {
                left: a,
                right: Frame::with_id(8)
            })
        );
    }
}
