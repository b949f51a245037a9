//! The closed set of spatial kinds and the operations defined between them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Algebraic category of a spatial quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Spatial velocity [ω; v].
    Twist,
    /// Spatial force [τ; f].
    Wrench,
    /// Spatial momentum [h; p].
    SpatialMomentum,
    /// 6x6 operator mapping a twist to a momentum.
    SpatialInertia,
    /// 6x6 operator mapping a wrench to a twist.
    SpatialInverseInertia,
}

/// Whether a kind lives in motion space, force space, or maps between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    Motion,
    Force,
    Operator,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 5] = [
        Kind::Twist,
        Kind::Wrench,
        Kind::SpatialMomentum,
        Kind::SpatialInertia,
        Kind::SpatialInverseInertia,
    ];

    pub fn category(self) -> Category {
        match self {
            Kind::Twist => Category::Motion,
            Kind::Wrench | Kind::SpatialMomentum => Category::Force,
            Kind::SpatialInertia | Kind::SpatialInverseInertia => Category::Operator,
        }
    }

    /// True for motion vectors (twists).
    pub fn is_motion(self) -> bool {
        self.category() == Category::Motion
    }

    /// True for force vectors (wrenches and momenta).
    pub fn is_force(self) -> bool {
        self.category() == Category::Force
    }

    /// True for the 6x6 operator kinds.
    pub fn is_operator(self) -> bool {
        self.category() == Category::Operator
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Twist => "Twist",
            Kind::Wrench => "Wrench",
            Kind::SpatialMomentum => "SpatialMomentum",
            Kind::SpatialInertia => "SpatialInertia",
            Kind::SpatialInverseInertia => "SpatialInverseInertia",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary operation between two spatial quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
        })
    }
}
