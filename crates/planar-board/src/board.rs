//! The object factory.
//!
//! [`Board`] owns one point graph and one object registry. Its factory
//! methods resolve every referenced name first and only then create graph
//! points and register the object, so an error never leaves a partial
//! construction behind.

use planar_graph::{DeriveRule, PointId, PointStore, PropagationReport};
use planar_registry::{
    CircleShape, GeomObject, IdAllocator, LineShape, ObjectLookup, ObjectRegistry, Radius,
    ResolvedObject, Shape,
};
use planar_types::{Category, Coord, ObjectId, ObjectKind, Rgb};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::BoardConfig;
use crate::error::{CommandError, CommandResult};

/// Optional header fields of a new object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObjectOptions {
    /// Identifier; an auto id is allocated when absent.
    pub id: Option<ObjectId>,
    /// Display flag; [`BoardConfig::default_visible`] when absent.
    pub visible: Option<bool>,
    /// Color; a generated color when absent.
    pub color: Option<Rgb>,
}

/// Second argument of a circle construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusArg {
    Length(f64),
    Through(ObjectId),
}

/// Where a moved point goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Destination {
    /// The current coordinate of another point.
    Point(ObjectId),
    /// A literal coordinate.
    At(Coord),
}

/// A drawing board: the point graph, the objects built on it, and the state
/// needed to name and color new objects.
pub struct Board {
    config: BoardConfig,
    points: PointStore,
    objects: ObjectRegistry,
    ids: IdAllocator,
    rng: StdRng,
    pub(crate) script_depth: usize,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            points: PointStore::new(),
            objects: ObjectRegistry::new(),
            ids: IdAllocator::new(),
            rng,
            script_depth: 0,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn points(&self) -> &PointStore {
        &self.points
    }

    pub fn objects(&self) -> &ObjectRegistry {
        &self.objects
    }

    // ---------------------------------------------------------------
    // Factory
    // ---------------------------------------------------------------

    /// Create a free point at `at`.
    pub fn create_point(&mut self, at: Coord, options: ObjectOptions) -> ObjectId {
        let point = self.points.create_root(at);
        self.register(ObjectKind::Point, Shape::Point(point), options)
    }

    /// Create a segment between two named points.
    pub fn create_segment(
        &mut self,
        a: ObjectId,
        b: ObjectId,
        options: ObjectOptions,
    ) -> CommandResult<ObjectId> {
        let (pt1, pt2) = (self.point_of(a)?, self.point_of(b)?);
        let shape = LineShape {
            pt1,
            pt2,
            show1: pt1,
            show2: pt2,
        };
        Ok(self.register(ObjectKind::Segment, Shape::Line(shape), options))
    }

    /// Create a ray from `origin` through `through`.
    ///
    /// The far display endpoint is a derived point that follows the
    /// direction from the origin to the through-point.
    pub fn create_ray(
        &mut self,
        origin: ObjectId,
        through: ObjectId,
        options: ObjectOptions,
    ) -> CommandResult<ObjectId> {
        let (pt1, pt2) = (self.point_of(origin)?, self.point_of(through)?);
        let far = self.points.create_derived(&[pt1, pt2], self.projection())?;
        let shape = LineShape {
            pt1,
            pt2,
            show1: pt1,
            show2: far,
        };
        Ok(self.register(ObjectKind::Ray, Shape::Line(shape), options))
    }

    /// Create a line through two named points, drawn between two derived
    /// points far out in each direction.
    pub fn create_line(
        &mut self,
        a: ObjectId,
        b: ObjectId,
        options: ObjectOptions,
    ) -> CommandResult<ObjectId> {
        let (pt1, pt2) = (self.point_of(a)?, self.point_of(b)?);
        let rule = self.projection();
        let behind = self.points.create_derived(&[pt2, pt1], rule)?;
        let ahead = self.points.create_derived(&[pt1, pt2], rule)?;
        let shape = LineShape {
            pt1,
            pt2,
            show1: behind,
            show2: ahead,
        };
        Ok(self.register(ObjectKind::Line, Shape::Line(shape), options))
    }

    /// Create a circle around a named center.
    pub fn create_circle(
        &mut self,
        center: ObjectId,
        radius: RadiusArg,
        options: ObjectOptions,
    ) -> CommandResult<ObjectId> {
        let center = self.point_of(center)?;
        let radius = match radius {
            RadiusArg::Length(r) if !r.is_finite() || r < 0.0 => {
                return Err(CommandError::invalid("radius", format!("{r} is not a non-negative number")));
            }
            RadiusArg::Length(r) => Radius::Fixed(r),
            RadiusArg::Through(name) => Radius::Through(self.point_of(name)?),
        };
        let shape = CircleShape { center, radius };
        Ok(self.register(ObjectKind::Circle, Shape::Circle(shape), options))
    }

    /// Create the midpoint of two named points as a new point object.
    pub fn midpoint(
        &mut self,
        a: ObjectId,
        b: ObjectId,
        options: ObjectOptions,
    ) -> CommandResult<ObjectId> {
        let (pt1, pt2) = (self.point_of(a)?, self.point_of(b)?);
        let mid = self.points.create_derived(&[pt1, pt2], DeriveRule::Midpoint)?;
        Ok(self.register(ObjectKind::Point, Shape::Point(mid), options))
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Move named points and propagate to everything derived from them.
    ///
    /// Every destination is read before anything moves, so
    /// `move_points([A, B], [B, A])` swaps the two points.
    pub fn move_points(
        &mut self,
        names: &[ObjectId],
        destinations: &[Destination],
    ) -> CommandResult<PropagationReport> {
        if names.is_empty() || destinations.is_empty() {
            return Err(CommandError::not_enough("move-pt"));
        }
        if names.len() != destinations.len() {
            return Err(CommandError::invalid(
                "destinations",
                format!("{} points but {} destinations", names.len(), destinations.len()),
            ));
        }

        let roots = names
            .iter()
            .map(|name| self.point_of(*name))
            .collect::<CommandResult<Vec<_>>>()?;
        let coords = destinations
            .iter()
            .map(|dst| self.destination_coord(*dst))
            .collect::<CommandResult<Vec<_>>>()?;

        let report = self.points.move_points(&roots, &coords)?;
        debug!(
            moved = report.moved.len(),
            recomputed = report.recomputed.len(),
            "moved points"
        );
        Ok(report)
    }

    /// Set the display flag of named objects of any category.
    ///
    /// All names are checked before any flag changes.
    pub fn set_visible(&mut self, names: &[ObjectId], visible: bool) -> CommandResult<()> {
        if let Some(missing) = names.iter().find(|id| self.objects.find_any(**id).is_none()) {
            return Err(CommandError::ObjectNotFound {
                category: None,
                name: missing.name(),
            });
        }
        for id in names {
            self.objects.set_visible(*id, visible)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------

    /// Resolve the newest object named `id` in `category`.
    pub fn lookup(&self, category: Category, id: ObjectId) -> CommandResult<ResolvedObject> {
        Ok(self.objects.resolve(&self.points, category, id)?)
    }

    /// Resolve the newest object named `id`, searching points, then
    /// line-likes, then circles.
    pub fn lookup_any(&self, id: ObjectId) -> CommandResult<ResolvedObject> {
        let object = self.objects.find_any(id).ok_or(CommandError::ObjectNotFound {
            category: None,
            name: id.name(),
        })?;
        Ok(ResolvedObject::from_object(object, &self.points)?)
    }

    /// Every registered object, resolved.
    pub fn list(&self) -> CommandResult<Vec<ResolvedObject>> {
        self.objects
            .iter()
            .map(|object| ResolvedObject::from_object(object, &self.points).map_err(Into::into))
            .collect()
    }

    /// The graph point behind the point object `id`.
    pub fn point_of(&self, id: ObjectId) -> CommandResult<PointId> {
        match self.objects.require(Category::Point, id)?.shape {
            Shape::Point(point) => Ok(point),
            _ => Err(CommandError::ObjectNotFound {
                category: Some(Category::Point),
                name: id.name(),
            }),
        }
    }

    fn destination_coord(&self, destination: Destination) -> CommandResult<Coord> {
        match destination {
            Destination::At(coord) => Ok(coord),
            Destination::Point(name) => {
                let point = self.point_of(name)?;
                self.points.coord(point).ok_or(CommandError::ObjectNotFound {
                    category: Some(Category::Point),
                    name: name.name(),
                })
            }
        }
    }

    fn projection(&self) -> DeriveRule {
        DeriveRule::Projection {
            distance: self.config.projection_distance,
        }
    }

    fn register(&mut self, kind: ObjectKind, shape: Shape, options: ObjectOptions) -> ObjectId {
        let id = match options.id {
            Some(id) => id,
            None => self.ids.next_id(),
        };
        let color = match options.color {
            Some(color) => color,
            None => Rgb::random(&mut self.rng),
        };
        self.objects.register(GeomObject {
            id,
            kind,
            visible: options.visible.unwrap_or(self.config.default_visible),
            color,
            shape,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
