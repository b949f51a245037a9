//! Runtime-dispatched spatial algebra over a closed set of kinds.
//!
//! [`Spatial`] holds any one of the five spatial kinds. Products and sums
//! check frames first, then dispatch on the ordered kind pair through an
//! exhaustive `match`; pairs outside the table return
//! [`SpatialError::TypeMismatch`]. Products with a spatial momentum on the
//! left are rejected with [`SpatialError::Unsupported`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatialError, ensure_same_frame};
use crate::frame::Frame;
use crate::inertia::{SpatialInertia, SpatialInverseInertia};
use crate::kind::{Kind, Operation};
use crate::product::SpatialMul;
use crate::vector::{SpatialMomentum, Twist, Wrench};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Spatial {
    Twist(Twist),
    Wrench(Wrench),
    SpatialMomentum(SpatialMomentum),
    SpatialInertia(SpatialInertia),
    SpatialInverseInertia(SpatialInverseInertia),
}

/// Result of a spatial product: either a scalar (power) or a new quantity.
#[derive(Debug, Clone, Copy)]
pub enum Product {
    Scalar(f64),
    Quantity(Spatial),
}

impl Product {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Product::Scalar(s) => Some(*s),
            Product::Quantity(_) => None,
        }
    }

    pub fn as_quantity(&self) -> Option<&Spatial> {
        match self {
            Product::Scalar(_) => None,
            Product::Quantity(q) => Some(q),
        }
    }
}

impl Spatial {
    pub fn kind(&self) -> Kind {
        match self {
            Spatial::Twist(_) => Kind::Twist,
            Spatial::Wrench(_) => Kind::Wrench,
            Spatial::SpatialMomentum(_) => Kind::SpatialMomentum,
            Spatial::SpatialInertia(_) => Kind::SpatialInertia,
            Spatial::SpatialInverseInertia(_) => Kind::SpatialInverseInertia,
        }
    }

    pub fn frame(&self) -> Frame {
        match self {
            Spatial::Twist(v) => v.frame(),
            Spatial::Wrench(v) => v.frame(),
            Spatial::SpatialMomentum(v) => v.frame(),
            Spatial::SpatialInertia(m) => m.frame(),
            Spatial::SpatialInverseInertia(m) => m.frame(),
        }
    }

    /// Raw entries: 6 for vectors, 36 (column-major) for operators.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Spatial::Twist(v) => v.as_slice(),
            Spatial::Wrench(v) => v.as_slice(),
            Spatial::SpatialMomentum(v) => v.as_slice(),
            Spatial::SpatialInertia(m) => m.as_slice(),
            Spatial::SpatialInverseInertia(m) => m.as_slice(),
        }
    }

    /// `self + rhs`. Frames must match and both sides must be the same
    /// additive kind.
    pub fn try_add(&self, rhs: &Spatial) -> Result<Spatial> {
        ensure_same_frame(self.frame(), rhs.frame())
            .inspect_err(|e| reject(Operation::Add, self, rhs, e))?;
        let sum = match (self, rhs) {
            (Spatial::Twist(a), Spatial::Twist(b)) => Spatial::Twist(a.try_add(b)?),
            (Spatial::Wrench(a), Spatial::Wrench(b)) => Spatial::Wrench(a.try_add(b)?),
            (Spatial::SpatialMomentum(a), Spatial::SpatialMomentum(b)) => {
                Spatial::SpatialMomentum(a.try_add(b)?)
            }
            (Spatial::SpatialInertia(a), Spatial::SpatialInertia(b)) => {
                Spatial::SpatialInertia(a.try_add(b)?)
            }
            _ => return Err(self.mismatch(Operation::Add, rhs)),
        };
        Ok(sum)
    }

    /// `self * rhs`, dispatched on the ordered kind pair.
    pub fn try_mul(&self, rhs: &Spatial) -> Result<Product> {
        ensure_same_frame(self.frame(), rhs.frame())
            .inspect_err(|e| reject(Operation::Mul, self, rhs, e))?;
        let product = match (self, rhs) {
            (Spatial::Twist(t), Spatial::Wrench(w)) => Product::Scalar(t.spatial_mul(w)?),
            (Spatial::Twist(t), Spatial::SpatialInertia(i)) => {
                Product::Quantity(Spatial::SpatialMomentum(t.spatial_mul(i)?))
            }
            (Spatial::SpatialInertia(i), Spatial::Twist(t)) => {
                Product::Quantity(Spatial::SpatialMomentum(i.spatial_mul(t)?))
            }
            (Spatial::Wrench(w), Spatial::Twist(t)) => Product::Scalar(w.spatial_mul(t)?),
            (Spatial::SpatialInverseInertia(m), Spatial::Wrench(w)) => {
                Product::Quantity(Spatial::Twist(m.spatial_mul(w)?))
            }
            (Spatial::SpatialMomentum(_), _) => {
                let err = SpatialError::Unsupported {
                    op: Operation::Mul,
                    kind: Kind::SpatialMomentum,
                };
                reject(Operation::Mul, self, rhs, &err);
                return Err(err);
            }
            (Spatial::Twist(_), _)
            | (Spatial::Wrench(_), _)
            | (Spatial::SpatialInertia(_), _)
            | (Spatial::SpatialInverseInertia(_), _) => {
                return Err(self.mismatch(Operation::Mul, rhs));
            }
        };
        Ok(product)
    }

    fn mismatch(&self, op: Operation, rhs: &Spatial) -> SpatialError {
        let err = SpatialError::TypeMismatch {
            op,
            left: self.kind(),
            right: rhs.kind(),
        };
        reject(op, self, rhs, &err);
        err
    }
}

fn reject(op: Operation, lhs: &Spatial, rhs: &Spatial, err: &SpatialError) {
    tracing::debug!(
        %op,
        left = %lhs.kind(),
        right = %rhs.kind(),
        error = %err,
        "rejected spatial operation"
    );
}

impl fmt::Display for Spatial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spatial::Twist(v) => fmt::Display::fmt(v, f),
            Spatial::Wrench(v) => fmt::Display::fmt(v, f),
            Spatial::SpatialMomentum(v) => fmt::Display::fmt(v, f),
            Spatial::SpatialInertia(m) => fmt::Display::fmt(m, f),
            Spatial::SpatialInverseInertia(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl From<Twist> for Spatial {
    fn from(v: Twist) -> Self {
        Spatial::Twist(v)
    }
}

impl From<Wrench> for Spatial {
    fn from(v: Wrench) -> Self {
        Spatial::Wrench(v)
    }
}

impl From<SpatialMomentum> for Spatial {
    fn from(v: SpatialMomentum) -> Self {
        Spatial::SpatialMomentum(v)
    }
}

impl From<SpatialInertia> for Spatial {
    fn from(m: SpatialInertia) -> Self {
        Spatial::SpatialInertia(m)
    }
}

impl From<SpatialInverseInertia> for Spatial {
    fn from(m: SpatialInverseInertia) -> Self {
        Spatial::SpatialInverseInertia(m)
    }
}
