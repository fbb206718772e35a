//! Curve Points
//!
//! Affine points are a tagged union: a finite `(x, y)` or the point at
//! infinity. Jacobian points `(X, Y, Z)` map to affine `(X/Z², Y/Z³)`, with
//! `Z = 0` denoting infinity; they are only used inside the arithmetic.
//!
//! A finite point is never overloaded to mean infinity. On curves with odd
//! `p`, nonzero discriminant and an odd group order no on-curve point has
//! `y = 0`, but curves with an even order do have such points and they are
//! ordinary finite points here.

use serde::{Deserialize, Serialize};

use crate::field::{ONE, U576, ZERO};

/// Affine point, or the point at infinity
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// Identity element of the group
    Infinity,
    /// Finite point `(x, y)`
    Affine {
        /// x-coordinate
        x: U576,
        /// y-coordinate
        y: U576,
    },
}

impl Point {
    /// Finite point from coordinates. Not checked against any curve.
    pub fn new(x: U576, y: U576) -> Self {
        Point::Affine { x, y }
    }

    /// Check if point at infinity
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate of a finite point
    pub fn x(&self) -> Option<U576> {
        match self {
            Point::Affine { x, .. } => Some(*x),
            Point::Infinity => None,
        }
    }

    /// y-coordinate of a finite point
    pub fn y(&self) -> Option<U576> {
        match self {
            Point::Affine { y, .. } => Some(*y),
            Point::Infinity => None,
        }
    }

    /// Convert to Jacobian coordinates (`Z = 1`, or `Z = 0` for infinity)
    pub(crate) fn to_jacobian(&self) -> JacobianPoint {
        match self {
            Point::Affine { x, y } => JacobianPoint { x: *x, y: *y, z: ONE },
            Point::Infinity => JacobianPoint::infinity(),
        }
    }
}

impl From<(U576, U576)> for Point {
    fn from((x, y): (U576, U576)) -> Self {
        Point::new(x, y)
    }
}

/// Jacobian point (X, Y, Z)
/// Represents (x, y) where x = X/Z², y = Y/Z³
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JacobianPoint {
    /// X
    pub x: U576,
    /// Y
    pub y: U576,
    /// Z, zero for infinity
    pub z: U576,
}

impl JacobianPoint {
    /// Point at infinity
    pub fn infinity() -> Self {
        JacobianPoint { x: ONE, y: ONE, z: ZERO }
    }

    /// Check if point at infinity
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }
}
