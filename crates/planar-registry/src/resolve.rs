//! Drawable view of an object at the current point coordinates.
//!
//! This is what a renderer or picker consumes: the object's display
//! attributes plus every coordinate needed to draw it, read from the point
//! store at the moment of resolution.

use std::fmt;

use planar_graph::{PointId, PointStore};
use planar_types::{Coord, ObjectId, ObjectKind, Rgb};
use serde::Serialize;

use crate::error::{RegistryError, RegistryResult};
use crate::object::{GeomObject, Radius, Shape};

/// An object with its coordinates resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    pub visible: bool,
    pub color: Rgb,
    pub geometry: ResolvedGeometry,
}

/// Current coordinates of an object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ResolvedGeometry {
    Point {
        at: Coord,
    },
    Line {
        pt1: Coord,
        pt2: Coord,
        show1: Coord,
        show2: Coord,
    },
    Circle {
        center: Coord,
        radius: f64,
    },
}

impl ResolvedObject {
    /// Resolve `object` against the coordinates in `store`.
    ///
    /// A circle defined through a point gets its radius from the live
    /// distance between the center and that point.
    pub fn from_object(object: &GeomObject, store: &PointStore) -> RegistryResult<Self> {
        let at = |point: PointId| {
            store.coord(point).ok_or(RegistryError::DanglingPoint {
                object: object.id,
                point,
            })
        };

        let geometry = match &object.shape {
            Shape::Point(p) => ResolvedGeometry::Point { at: at(*p)? },
            Shape::Line(line) => ResolvedGeometry::Line {
                pt1: at(line.pt1)?,
                pt2: at(line.pt2)?,
                show1: at(line.show1)?,
                show2: at(line.show2)?,
            },
            Shape::Circle(circle) => {
                let center = at(circle.center)?;
                let radius = match circle.radius {
                    Radius::Fixed(r) => r,
                    Radius::Through(p) => center.distance(at(p)?),
                };
                ResolvedGeometry::Circle { center, radius }
            }
        };

        Ok(Self {
            id: object.id,
            name: object.id.name(),
            kind: object.kind,
            visible: object.visible,
            color: object.color,
            geometry,
        })
    }
}

impl fmt::Display for ResolvedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.name, self.color)?;
        if !self.visible {
            write!(f, " hidden")?;
        }
        match self.geometry {
            ResolvedGeometry::Point { at } => write!(f, " at {at}"),
            ResolvedGeometry::Line { pt1, pt2, show1, show2 } => {
                write!(f, " {pt1} -> {pt2}, drawn {show1} -> {show2}")
            }
            ResolvedGeometry::Circle { center, radius } => {
                write!(f, " center {center} radius {radius}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{CircleShape, LineShape};
    use planar_graph::DeriveRule;

    fn object(id: &str, kind: ObjectKind, shape: Shape) -> GeomObject {
        GeomObject {
            id: ObjectId::from_name(id),
            kind,
            visible: true,
            color: Rgb::new(0x112233),
            shape,
        }
    }

    #[test]
    fn point_resolves_to_its_coordinate() {
        let mut store = PointStore::new();
        let p = store.create_root(Coord::new(1.0, 2.0));
        let r = ResolvedObject::from_object(&object("A", ObjectKind::Point, Shape::Point(p)), &store).unwrap();
        assert_eq!(r.geometry, ResolvedGeometry::Point { at: Coord::new(1.0, 2.0) });
        assert_eq!(r.name, "A");
    }

    #[test]
    fn ray_resolves_display_endpoints() {
        let mut store = PointStore::new();
        let a = store.create_root(Coord::new(0.0, 0.0));
        let b = store.create_root(Coord::new(1.0, 0.0));
        let far = store
            .create_derived(&[a, b], DeriveRule::Projection { distance: 100.0 })
            .unwrap();
        let ray = object(
            "r",
            ObjectKind::Ray,
            Shape::Line(LineShape { pt1: a, pt2: b, show1: a, show2: far }),
        );
        let r = ResolvedObject::from_object(&ray, &store).unwrap();
        let ResolvedGeometry::Line { show1, show2, .. } = r.geometry else {
            panic!("expected line geometry");
        };
        assert_eq!(show1, Coord::new(0.0, 0.0));
        assert!(show2.approx_eq(Coord::new(100.0, 0.0), 1e-9));
    }

    #[test]
    fn circle_through_point_tracks_live_distance() {
        let mut store = PointStore::new();
        let center = store.create_root(Coord::new(0.0, 0.0));
        let rim = store.create_root(Coord::new(3.0, 4.0));
        let circle = object(
            "c",
            ObjectKind::Circle,
            Shape::Circle(CircleShape { center, radius: Radius::Through(rim) }),
        );
        assert_eq!(
            ResolvedObject::from_object(&circle, &store).unwrap().geometry,
            ResolvedGeometry::Circle { center: Coord::origin(), radius: 5.0 }
        );

        store.move_points(&[rim], &[Coord::new(0.0, 2.0)]).unwrap();
        assert_eq!(
            ResolvedObject::from_object(&circle, &store).unwrap().geometry,
            ResolvedGeometry::Circle { center: Coord::origin(), radius: 2.0 }
        );
    }

    #[test]
    fn fixed_radius_never_changes() {
        let mut store = PointStore::new();
        let center = store.create_root(Coord::new(0.0, 0.0));
        let circle = object(
            "c",
            ObjectKind::Circle,
            Shape::Circle(CircleShape { center, radius: Radius::Fixed(7.5) }),
        );
        store.move_points(&[center], &[Coord::new(10.0, 10.0)]).unwrap();
        assert_eq!(
            ResolvedObject::from_object(&circle, &store).unwrap().geometry,
            ResolvedGeometry::Circle { center: Coord::new(10.0, 10.0), radius: 7.5 }
        );
    }

    #[test]
    fn dangling_point_is_reported() {
        let mut other = PointStore::new();
        let p = other.create_root(Coord::origin());
        let empty = PointStore::new();
        let err = ResolvedObject::from_object(&object("A", ObjectKind::Point, Shape::Point(p)), &empty)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DanglingPoint { .. }));
    }

    #[test]
    fn json_view_is_tagged() {
        let mut store = PointStore::new();
        let p = store.create_root(Coord::new(1.0, 2.0));
        let r = ResolvedObject::from_object(&object("A", ObjectKind::Point, Shape::Point(p)), &store).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["kind"], "point");
        assert_eq!(json["geometry"]["shape"], "point");
        assert_eq!(json["geometry"]["at"]["x"], 1.0);
        assert_eq!(json["color"], 0x112233);
    }

    #[test]
    fn display_mentions_hidden_objects() {
        let mut store = PointStore::new();
        let p = store.create_root(Coord::new(1.0, 2.0));
        let mut obj = object("A", ObjectKind::Point, Shape::Point(p));
        obj.visible = false;
        let text = ResolvedObject::from_object(&obj, &store).unwrap().to_string();
        assert_eq!(text, "point A #112233 hidden at (1, 2)");
    }
}
