//! Spatial inertia operators.
//!
//! A [`SpatialInertia`] maps a twist to a spatial momentum; a
//! [`SpatialInverseInertia`] maps a wrench back to a twist. Both are 6x6
//! matrices bound to a frame. Symmetry and positive-definiteness are the
//! responsibility of whoever builds the matrix.

use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, Shape, SpatialError, ensure_same_frame};
use crate::frame::Frame;
use crate::kind::Kind;
use crate::vector::Twist;
use crate::{DMat, Mat3, Mat6, SPATIAL_DIM, Vec3, skew};

mod sealed {
    pub trait Sealed {}
}

/// Marker for the two operator kinds. Sealed: the kind set is closed.
pub trait OperatorKind: sealed::Sealed + Copy + fmt::Debug + Send + Sync + 'static {
    const KIND: Kind;
    /// The kind produced by inverting this operator.
    type Inverse: OperatorKind;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InertiaKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InverseInertiaKind;

impl sealed::Sealed for InertiaKind {}
impl sealed::Sealed for InverseInertiaKind {}

impl OperatorKind for InertiaKind {
    const KIND: Kind = Kind::SpatialInertia;
    type Inverse = InverseInertiaKind;
}

impl OperatorKind for InverseInertiaKind {
    const KIND: Kind = Kind::SpatialInverseInertia;
    type Inverse = InertiaKind;
}

/// 6x6 spatial operator of kind `K` expressed in a particular frame.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct SpatialOperator<K: OperatorKind> {
    data: Mat6,
    frame: Frame,
    #[cfg_attr(feature = "serde", serde(skip))]
    kind: PhantomData<K>,
}

/// Maps twists to spatial momenta.
pub type SpatialInertia = SpatialOperator<InertiaKind>;
/// Maps wrenches to twists.
pub type SpatialInverseInertia = SpatialOperator<InverseInertiaKind>;

impl<K: OperatorKind> SpatialOperator<K> {
    #[inline]
    pub fn from_mat6(data: Mat6, frame: Frame) -> Self {
        Self {
            data,
            frame,
            kind: PhantomData,
        }
    }

    /// Copy 36 values given in row-major order.
    pub fn from_row_slice(data: &[f64], frame: Frame) -> Result<Self> {
        if data.len() != SPATIAL_DIM * SPATIAL_DIM {
            return Err(SpatialError::Dimension {
                expected: Shape::vector(SPATIAL_DIM * SPATIAL_DIM),
                actual: Shape::vector(data.len()),
            });
        }
        Ok(Self::from_mat6(Mat6::from_row_slice(data), frame))
    }

    /// Copy a dynamically sized matrix, which must be 6x6.
    pub fn from_dmatrix(data: &DMat, frame: Frame) -> Result<Self> {
        let (rows, cols) = data.shape();
        if (rows, cols) != (SPATIAL_DIM, SPATIAL_DIM) {
            return Err(SpatialError::Dimension {
                expected: Shape::new(SPATIAL_DIM, SPATIAL_DIM),
                actual: Shape::new(rows, cols),
            });
        }
        Ok(Self::from_mat6(
            data.fixed_view::<6, 6>(0, 0).into_owned(),
            frame,
        ))
    }

    #[inline]
    pub fn identity(frame: Frame) -> Self {
        Self::from_mat6(Mat6::identity(), frame)
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        K::KIND
    }

    #[inline]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    #[inline]
    pub fn data(&self) -> &Mat6 {
        &self.data
    }

    /// Column-major view of the matrix entries.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// True when every entry matches its transpose within `eps`.
    pub fn is_symmetric(&self, eps: f64) -> bool {
        (self.data - self.data.transpose()).amax() <= eps
    }

    /// Matrix inverse, as the dual operator kind.
    pub fn try_inverse(&self) -> Result<SpatialOperator<K::Inverse>> {
        match self.data.try_inverse() {
            Some(inv) => Ok(SpatialOperator::from_mat6(inv, self.frame)),
            None => {
                tracing::debug!(kind = %K::KIND, frame = %self.frame, "singular operator");
                Err(SpatialError::Singular { kind: K::KIND })
            }
        }
    }
}

impl SpatialInertia {
    /// Rigid-body inertia about the frame origin from mass, center of mass
    /// and rotational inertia about the center of mass.
    ///
    /// I = | Ic + m[c]×[c]×ᵀ   m[c]× |
    ///     | m[c]×ᵀ             mE    |
    pub fn from_mass_properties(mass: f64, com: Vec3, inertia: Mat3, frame: Frame) -> Self {
        let cx = skew(&com);
        let mut mat = Mat6::zeros();
        let top_left = inertia + cx * cx.transpose() * mass;
        mat.fixed_view_mut::<3, 3>(0, 0).copy_from(&top_left);
        let mcx = cx * mass;
        mat.fixed_view_mut::<3, 3>(0, 3).copy_from(&mcx);
        mat.fixed_view_mut::<3, 3>(3, 0).copy_from(&mcx.transpose());
        mat.fixed_view_mut::<3, 3>(3, 3)
            .copy_from(&(Mat3::identity() * mass));
        Self::from_mat6(mat, frame)
    }

    /// Point mass at `pos`.
    pub fn point_mass(mass: f64, pos: Vec3, frame: Frame) -> Self {
        Self::from_mass_properties(mass, pos, Mat3::zeros(), frame)
    }

    /// Uniform solid sphere centered at the frame origin.
    pub fn sphere(mass: f64, radius: f64, frame: Frame) -> Self {
        let i = 2.0 / 5.0 * mass * radius * radius;
        Self::from_mass_properties(
            mass,
            Vec3::zeros(),
            Mat3::from_diagonal(&Vec3::new(i, i, i)),
            frame,
        )
    }

    /// Mass, read from the linear block.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.data[(3, 3)]
    }

    /// Elementwise sum of two inertias in the same frame (composite body).
    pub fn try_add(&self, other: &SpatialInertia) -> Result<SpatialInertia> {
        let frame = ensure_same_frame(self.frame, other.frame)?;
        Ok(SpatialInertia::from_mat6(self.data + other.data, frame))
    }

    /// Kinetic energy ½ vᵀ I v of a body moving with `twist`.
    pub fn kinetic_energy(&self, twist: &Twist) -> Result<f64> {
        ensure_same_frame(self.frame, twist.frame())?;
        let v = twist.data();
        Ok(0.5 * v.dot(&(self.data * v)))
    }
}

impl<K: OperatorKind> fmt::Display for SpatialOperator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} @ {}", K::KIND, self.frame)?;
        write!(f, "{}", self.data)
    }
}
