use std::fmt;

use serde::{Deserialize, Serialize};

/// Length below which a direction vector is treated as zero.
pub const EPS_LEN: f64 = 1e-12;

/// A position on the drawing plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// Create a coordinate from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Arithmetic mean of two coordinates.
    pub fn midpoint(a: Coord, b: Coord) -> Coord {
        Coord {
            x: (a.x + b.x) * 0.5,
            y: (a.y + b.y) * 0.5,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Coord) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The point `distance` units away from `origin` in the direction of
    /// `through`.
    ///
    /// When `origin` and `through` coincide there is no direction to follow
    /// and `origin` itself is returned.
    pub fn project_through(origin: Coord, through: Coord, distance: f64) -> Coord {
        let dx = through.x - origin.x;
        let dy = through.y - origin.y;
        let len = dx.hypot(dy);
        if len <= EPS_LEN {
            return origin;
        }
        Coord {
            x: origin.x + dx / len * distance,
            y: origin.y + dy / len * distance,
        }
    }

    /// Returns `true` if both components are within `eps` of `other`'s.
    pub fn approx_eq(self, other: Coord, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
