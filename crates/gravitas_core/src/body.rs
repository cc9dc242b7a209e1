use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::vector::Vector2D;

/// A point mass drawn as a disc of `radius`.
///
/// Plain mutable record: resolution policies update fields in place.
/// Physical validity (positive mass, non-negative radius) is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub mass: f64,
    pub radius: f64,
    /// Set once the body has crossed a star formation threshold
    pub star: bool,
}

impl Body {
    pub fn new(position: Vector2D, velocity: Vector2D, mass: f64, radius: f64, star: bool) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
            star,
        }
    }

    /// π·r²
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Inverse of [`Body::area`], truncated to a whole radius
    pub fn radius_from_area(area: f64) -> f64 {
        (area / PI).sqrt().trunc()
    }

    /// Momentum (mass-weighted velocity)
    pub fn momentum(&self) -> Vector2D {
        self.velocity * self.mass
    }

    /// Whether the discs of `self` and `other` overlap.
    /// Touching discs (distance == r1 + r2) do not count.
    pub fn overlaps(&self, other: &Body) -> bool {
        (self.position - other.position).length() < self.radius + other.radius
    }
}
