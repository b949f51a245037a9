//! 6D spatial vectors tagged with a kind and a frame.
//!
//! Convention: spatial vectors are [angular; linear] (Featherstone order).
//! A twist is [ω; v], a wrench is [τ; f], a spatial momentum is [h; p].

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, Shape, SpatialError, ensure_same_frame};
use crate::frame::Frame;
use crate::kind::{Category, Kind};
use crate::{SPATIAL_DIM, Vec3, Vec6};

mod sealed {
    pub trait Sealed {}
}

/// Marker for the three spatial vector kinds. Sealed: the kind set is closed.
pub trait VectorKind: sealed::Sealed + Copy + fmt::Debug + Send + Sync + 'static {
    const KIND: Kind;
    const CATEGORY: Category;
}

/// Vector kinds that live in force space (wrenches and momenta).
pub trait ForceVectorKind: VectorKind {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwistKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrenchKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MomentumKind;

impl sealed::Sealed for TwistKind {}
impl sealed::Sealed for WrenchKind {}
impl sealed::Sealed for MomentumKind {}

impl VectorKind for TwistKind {
    const KIND: Kind = Kind::Twist;
    const CATEGORY: Category = Category::Motion;
}

impl VectorKind for WrenchKind {
    const KIND: Kind = Kind::Wrench;
    const CATEGORY: Category = Category::Force;
}

impl VectorKind for MomentumKind {
    const KIND: Kind = Kind::SpatialMomentum;
    const CATEGORY: Category = Category::Force;
}

impl ForceVectorKind for WrenchKind {}
impl ForceVectorKind for MomentumKind {}

/// A 6D spatial vector of kind `K` expressed in a particular frame.
///
/// Values are immutable; every operation returns a new vector.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct SpatialVector<K: VectorKind> {
    data: Vec6,
    frame: Frame,
    #[cfg_attr(feature = "serde", serde(skip))]
    kind: PhantomData<K>,
}

/// Spatial velocity.
pub type Twist = SpatialVector<TwistKind>;
/// Spatial force.
pub type Wrench = SpatialVector<WrenchKind>;
/// Spatial momentum, the product of a spatial inertia and a twist.
pub type SpatialMomentum = SpatialVector<MomentumKind>;

impl<K: VectorKind> SpatialVector<K> {
    /// Wrap a 6D vector [angular; linear].
    #[inline]
    pub fn from_vec6(data: Vec6, frame: Frame) -> Self {
        Self {
            data,
            frame,
            kind: PhantomData,
        }
    }

    /// Create from angular and linear parts.
    #[inline]
    pub fn new(angular: Vec3, linear: Vec3, frame: Frame) -> Self {
        Self::from_vec6(
            Vec6::new(
                angular.x, angular.y, angular.z, linear.x, linear.y, linear.z,
            ),
            frame,
        )
    }

    /// Copy six values out of `data`. The vector never aliases the caller's buffer.
    pub fn from_slice(data: &[f64], frame: Frame) -> Result<Self> {
        if data.len() != SPATIAL_DIM {
            return Err(SpatialError::Dimension {
                expected: Shape::vector(SPATIAL_DIM),
                actual: Shape::vector(data.len()),
            });
        }
        Ok(Self::from_vec6(Vec6::from_column_slice(data), frame))
    }

    /// Zero vector.
    #[inline]
    pub fn zero(frame: Frame) -> Self {
        Self::from_vec6(Vec6::zeros(), frame)
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        K::KIND
    }

    #[inline]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// The underlying 6D vector [angular(3); linear(3)].
    #[inline]
    pub fn data(&self) -> &Vec6 {
        &self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice()
    }

    /// Angular (top 3) component.
    #[inline]
    pub fn angular(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Linear (bottom 3) component.
    #[inline]
    pub fn linear(&self) -> Vec3 {
        Vec3::new(self.data[3], self.data[4], self.data[5])
    }

    /// Elementwise sum of two vectors of the same kind in the same frame.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        let frame = ensure_same_frame(self.frame, other.frame)?;
        Ok(Self::from_vec6(self.data + other.data, frame))
    }

    /// Elementwise difference of two vectors of the same kind in the same frame.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        let frame = ensure_same_frame(self.frame, other.frame)?;
        Ok(Self::from_vec6(self.data - other.data, frame))
    }

    /// Multiply by a scalar, keeping the frame.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self::from_vec6(self.data * s, self.frame)
    }

    #[inline]
    pub(crate) fn dot_unchecked<R: VectorKind>(&self, other: &SpatialVector<R>) -> f64 {
        self.data.dot(&other.data)
    }
}

impl<K: VectorKind> Neg for SpatialVector<K> {
    type Output = SpatialVector<K>;
    #[inline]
    fn neg(self) -> SpatialVector<K> {
        SpatialVector::from_vec6(-self.data, self.frame)
    }
}

impl<K: VectorKind> Index<usize> for SpatialVector<K> {
    type Output = f64;
    #[inline]
    fn index(&self, idx: usize) -> &f64 {
        &self.data[idx]
    }
}

impl<K: VectorKind> fmt::Display for SpatialVector<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", K::KIND)?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "] @ {}", self.frame)
    }
}

impl Twist {
    /// Angular velocity ω.
    #[inline]
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular()
    }

    /// Linear velocity v.
    #[inline]
    pub fn linear_velocity(&self) -> Vec3 {
        self.linear()
    }

    /// Spatial cross product for motion vectors: v ×ₘ w.
    /// Used in velocity propagation.
    pub fn cross_motion(&self, other: &Twist) -> Result<Twist> {
        let frame = ensure_same_frame(self.frame, other.frame)?;
        let w = self.angular();
        let v = self.linear();
        let w2 = other.angular();
        let v2 = other.linear();
        Ok(Twist::new(w.cross(&w2), w.cross(&v2) + v.cross(&w2), frame))
    }

    /// Spatial cross product for force vectors: v ×f f.
    /// Used in bias force computation; also applies to momenta (v ×f h).
    pub fn cross_force<F: ForceVectorKind>(
        &self,
        other: &SpatialVector<F>,
    ) -> Result<SpatialVector<F>> {
        let frame = ensure_same_frame(self.frame, other.frame)?;
        let w = self.angular();
        let v = self.linear();
        let t = other.angular();
        let f = other.linear();
        Ok(SpatialVector::new(w.cross(&t) + v.cross(&f), w.cross(&f), frame))
    }
}

impl Wrench {
    /// Moment τ.
    #[inline]
    pub fn moment(&self) -> Vec3 {
        self.angular()
    }

    /// Linear force f.
    #[inline]
    pub fn force(&self) -> Vec3 {
        self.linear()
    }
}

impl SpatialMomentum {
    #[inline]
    pub fn angular_momentum(&self) -> Vec3 {
        self.angular()
    }

    #[inline]
    pub fn linear_momentum(&self) -> Vec3 {
        self.linear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_slice_copies() {
        let mut buf = vec![0.0; 6];
        let twist = Twist::from_slice(&buf, Frame::new()).unwrap();
        buf[0] += 1.0;
        assert_eq!(twist.as_slice(), &[0.0; 6]);
        assert_ne!(buf.as_slice(), twist.as_slice());
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = Wrench::from_slice(&[1.0, 2.0, 3.0], Frame::new()).unwrap_err();
        assert_eq!(
            err,
            SpatialError::Dimension {
                expected: Shape::vector(6),
                actual: Shape::vector(3),
            }
        );
        assert!(SpatialMomentum::from_slice(&[0.0; 7], Frame::new()).is_err());
    }

    #[test]
    fn test_angular_linear_split() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let twist = Twist::from_slice(&data, Frame::new()).unwrap();
        assert_eq!(twist.angular(), Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(twist.linear(), Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(twist.angular_velocity(), twist.angular());
        assert_eq!(twist.linear_velocity(), twist.linear());
        assert_eq!(twist[4], 4.0);
        assert_eq!(twist.kind(), Kind::Twist);
    }

    #[test]
    fn test_new_from_parts() {
        let frame = Frame::new();
        let w = Wrench::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0), frame);
        assert_eq!(w.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(w.moment(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(w.force(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(w.frame(), frame);
    }

    #[test]
    fn test_add_same_frame() {
        let frame = Frame::new();
        let t1 = Twist::from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], frame).unwrap();
        let t2 = Twist::from_slice(&[1.0; 6], Frame::with_id(frame.id())).unwrap();
        let t3 = t1.try_add(&t2).unwrap();
        assert_eq!(t3.frame(), frame);
        assert_relative_eq!(*t3.data(), t1.data() + t2.data(), epsilon = 1e-12);
    }

    #[test]
    fn test_add_different_frames() {
        let t1 = Twist::zero(Frame::new());
        let t2 = Twist::zero(Frame::new());
        assert!(matches!(
            t1.try_add(&t2),
            Err(SpatialError::FrameMismatch { .. })
        ));
        let m1 = SpatialMomentum::zero(Frame::new());
        let m2 = SpatialMomentum::zero(Frame::new());
        assert!(m1.try_sub(&m2).is_err());
    }

    #[test]
    fn test_sub_neg_scale() {
        let frame = Frame::new();
        let a = Wrench::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], frame).unwrap();
        let zero = a.try_sub(&a).unwrap();
        assert_relative_eq!(*zero.data(), Vec6::zeros());
        let neg = -a;
        assert_eq!(neg.frame(), frame);
        assert_relative_eq!(*neg.data(), -a.data());
        assert_relative_eq!(*a.scale(2.0).data(), *a.try_add(&a).unwrap().data());
    }

    #[test]
    fn test_cross_motion() {
        let frame = Frame::new();
        let v1 = Twist::new(Vec3::new(0.0, 0.0, 1.0), Vec3::zeros(), frame);
        let v2 = Twist::new(Vec3::new(1.0, 0.0, 0.0), Vec3::zeros(), frame);
        let result = v1.cross_motion(&v2).unwrap();
        // [0,0,1] × [1,0,0] = [0,1,0]
        assert_relative_eq!(result.angular().y, 1.0, epsilon = 1e-10);
        assert!(v1.cross_motion(&Twist::zero(Frame::new())).is_err());
    }

    #[test]
    fn test_cross_force_is_dual_of_cross_motion() {
        // (v ×f f) · m == -f · (v ×ₘ m)
        let frame = Frame::new();
        let v = Twist::from_slice(&[0.3, -1.0, 2.0, 0.5, 0.1, -0.7], frame).unwrap();
        let m = Twist::from_slice(&[1.0, 0.2, -0.4, 2.0, -1.5, 0.9], frame).unwrap();
        let f = Wrench::from_slice(&[-0.6, 1.1, 0.4, 0.8, 2.2, -1.3], frame).unwrap();
        let lhs = v.cross_force(&f).unwrap().data().dot(m.data());
        let rhs = -f.data().dot(v.cross_motion(&m).unwrap().data());
        assert_relative_eq!(lhs, rhs, epsilon = 1e-12);

        let h = SpatialMomentum::from_vec6(*f.data(), frame);
        let vh: SpatialMomentum = v.cross_force(&h).unwrap();
        assert_relative_eq!(*vh.data(), *v.cross_force(&f).unwrap().data());
    }

    #[test]
    fn test_marker_categories_agree_with_kind() {
        assert_eq!(TwistKind::CATEGORY, TwistKind::KIND.category());
        assert_eq!(WrenchKind::CATEGORY, WrenchKind::KIND.category());
        assert_eq!(MomentumKind::CATEGORY, MomentumKind::KIND.category());
    }

    #[test]
    fn test_display() {
        let t = Twist::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Frame::with_id(9)).unwrap();
        assert_eq!(t.to_string(), "Twist[1, 2, 3, 4, 5, 6] @ frame#9");
    }
}
