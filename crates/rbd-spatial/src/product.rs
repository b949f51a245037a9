//! Typed products between spatial quantities.
//!
//! `SpatialMul` is implemented for exactly these ordered pairs:
//!
//! | left                    | right             | output            |
//! |-------------------------|-------------------|-------------------|
//! | `Twist`                 | `Wrench`          | `f64` (power)     |
//! | `Wrench`                | `Twist`           | `f64` (power)     |
//! | `SpatialInertia`        | `Twist`           | `SpatialMomentum` |
//! | `Twist`                 | `SpatialInertia`  | `SpatialMomentum` |
//! | `SpatialInverseInertia` | `Wrench`          | `Twist`           |
//!
//! Any other pair fails to compile. Frames are still checked at runtime.

use crate::error::{Result, ensure_same_frame};
use crate::inertia::{SpatialInertia, SpatialInverseInertia};
use crate::vector::{SpatialMomentum, Twist, Wrench};

/// Frame-checked product `self * rhs`.
pub trait SpatialMul<Rhs> {
    type Output;

    fn spatial_mul(&self, rhs: &Rhs) -> Result<Self::Output>;
}

impl SpatialMul<Wrench> for Twist {
    type Output = f64;

    /// Instantaneous power delivered by `rhs` on a body moving with `self`.
    fn spatial_mul(&self, rhs: &Wrench) -> Result<f64> {
        ensure_same_frame(self.frame(), rhs.frame())?;
        Ok(self.dot_unchecked(rhs))
    }
}

impl SpatialMul<Twist> for Wrench {
    type Output = f64;

    fn spatial_mul(&self, rhs: &Twist) -> Result<f64> {
        ensure_same_frame(self.frame(), rhs.frame())?;
        Ok(self.dot_unchecked(rhs))
    }
}

impl SpatialMul<Twist> for SpatialInertia {
    type Output = SpatialMomentum;

    fn spatial_mul(&self, rhs: &Twist) -> Result<SpatialMomentum> {
        let frame = ensure_same_frame(self.frame(), rhs.frame())?;
        Ok(SpatialMomentum::from_vec6(self.data() * rhs.data(), frame))
    }
}

impl SpatialMul<SpatialInertia> for Twist {
    type Output = SpatialMomentum;

    /// Row-vector product vᵀ I. Equals I v when I is symmetric.
    fn spatial_mul(&self, rhs: &SpatialInertia) -> Result<SpatialMomentum> {
        let frame = ensure_same_frame(self.frame(), rhs.frame())?;
        Ok(SpatialMomentum::from_vec6(
            rhs.data().tr_mul(self.data()),
            frame,
        ))
    }
}

impl SpatialMul<Wrench> for SpatialInverseInertia {
    type Output = Twist;

    fn spatial_mul(&self, rhs: &Wrench) -> Result<Twist> {
        let frame = ensure_same_frame(self.frame(), rhs.frame())?;
        Ok(Twist::from_vec6(self.data() * rhs.data(), frame))
    }
}

impl Twist {
    /// Power `self · wrench`.
    #[inline]
    pub fn power(&self, wrench: &Wrench) -> Result<f64> {
        self.spatial_mul(wrench)
    }
}

impl SpatialInertia {
    /// Momentum of a body moving with `twist`.
    #[inline]
    pub fn momentum(&self, twist: &Twist) -> Result<SpatialMomentum> {
        self.spatial_mul(twist)
    }
}

impl SpatialInverseInertia {
    /// Twist produced by `wrench`.
    #[inline]
    pub fn apply(&self, wrench: &Wrench) -> Result<Twist> {
        self.spatial_mul(wrench)
    }
}
