//! Frame-checked spatial algebra for rigid-body mechanics.
//!
//! Implements 6D twists, wrenches and spatial momenta together with the
//! spatial inertia operators that map between them, following Featherstone's
//! [angular; linear] ordering. Every quantity carries the [`Frame`] it is
//! expressed in, and operations between quantities in different frames fail
//! with [`SpatialError::FrameMismatch`].
//!
//! Two APIs share the same semantics:
//! - the typed API ([`SpatialVector`], [`SpatialOperator`], [`SpatialMul`])
//!   where illegal kind pairs do not compile;
//! - the dynamic API ([`Spatial`]) for callers that hold quantities of mixed
//!   kinds, where illegal pairs return [`SpatialError::TypeMismatch`].

pub mod dynamic;
pub mod error;
pub mod frame;
pub mod inertia;
pub mod kind;
pub mod product;
pub mod vector;

pub use dynamic::{Product, Spatial};
pub use error::{Result, Shape, SpatialError};
pub use frame::Frame;
pub use inertia::{
    InertiaKind, InverseInertiaKind, OperatorKind, SpatialInertia, SpatialInverseInertia,
    SpatialOperator,
};
pub use kind::{Category, Kind, Operation};
pub use product::SpatialMul;
pub use vector::{
    ForceVectorKind, MomentumKind, SpatialMomentum, SpatialVector, Twist, TwistKind, VectorKind,
    Wrench, WrenchKind,
};

use nalgebra as na;

/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;
/// 3x3 matrix alias.
pub type Mat3 = na::Matrix3<f64>;
/// 6D vector alias.
pub type Vec6 = na::Vector6<f64>;
/// 6x6 matrix alias.
pub type Mat6 = na::Matrix6<f64>;
/// Dynamic matrix.
pub type DMat = na::DMatrix<f64>;

/// Number of components in a spatial vector.
pub const SPATIAL_DIM: usize = 6;

/// Cross-product matrix: [v]× such that [v]× w = v × w.
#[inline]
pub fn skew(v: &Vec3) -> Mat3 {
    Mat3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}
