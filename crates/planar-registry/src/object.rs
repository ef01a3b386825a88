//! Geometric objects and their payloads.

use planar_graph::PointId;
use planar_types::{Category, ObjectId, ObjectKind, Rgb};

/// A user-named geometric object.
#[derive(Clone, Debug, PartialEq)]
pub struct GeomObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub visible: bool,
    pub color: Rgb,
    pub shape: Shape,
}

impl GeomObject {
    /// The registry collection this object belongs to.
    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

/// Payload of a [`GeomObject`], selected by its kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Point(PointId),
    Line(LineShape),
    Circle(CircleShape),
}

/// Two defining points plus the two points a line-like is drawn between.
///
/// For segments the display points are the defining points. For rays the
/// first display point is the origin and the second is a derived point far
/// along the ray; lines derive both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineShape {
    pub pt1: PointId,
    pub pt2: PointId,
    pub show1: PointId,
    pub show2: PointId,
}

/// A center point and a radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleShape {
    pub center: PointId,
    pub radius: Radius,
}

/// How a circle's radius is determined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Radius {
    /// A literal radius, never recomputed.
    Fixed(f64),
    /// The live distance from the center to this point.
    Through(PointId),
}
