use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Two-component floating point vector.
///
/// A plain value: every operator returns a new vector and never touches its
/// operands. Scalar and element-wise variants are separate operator impls
/// (`v * 2.0` scales, `v * w` multiplies component by component).
///
/// Division by a zero scalar or by a vector with a zero component is not
/// checked; the result follows IEEE 754 (inf / NaN).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector with both components set to `v` (e.g. the screen center)
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean norm
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Both components truncated toward zero
    pub fn round(&self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }

    pub fn to_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Floored modulo: the result carries the sign of the divisor
fn floor_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.x, self.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul for Vector2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Div for Vector2D {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Rem<f64> for Vector2D {
    type Output = Self;

    fn rem(self, rhs: f64) -> Self {
        Self::new(floor_mod(self.x, rhs), floor_mod(self.y, rhs))
    }
}

impl Rem for Vector2D {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self::new(floor_mod(self.x, rhs.x), floor_mod(self.y, rhs.y))
    }
}
