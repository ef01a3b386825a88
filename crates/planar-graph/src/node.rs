//! Point nodes and the rules that derive their coordinates.
//!
//! Each [`PointNode`] is addressed by a [`PointId`], a stable index into the
//! owning [`PointStore`](crate::PointStore). Root nodes have no parents and
//! are moved only by direct request; derived nodes recompute their
//! coordinate from their parents through a [`DeriveRule`].

use std::fmt;

use planar_types::Coord;

/// Stable index of a point in its store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u32);

impl PointId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of this point in the store's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointId({})", self.0)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pt#{}", self.0)
    }
}

/// How a point obtains its coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeriveRule {
    /// Root point; the coordinate is set only by direct request.
    Free,
    /// Arithmetic mean of the two parents.
    Midpoint,
    /// The point `distance` units from parent 0 in the direction of parent 1.
    ///
    /// Used for the far display endpoints of rays and lines. Swapping the
    /// parents projects in the opposite direction.
    Projection {
        /// How far past the origin to project.
        distance: f64,
    },
}

impl DeriveRule {
    /// Number of parents this rule reads.
    pub fn arity(&self) -> usize {
        match self {
            Self::Free => 0,
            Self::Midpoint | Self::Projection { .. } => 2,
        }
    }

    /// Returns `true` for [`DeriveRule::Free`].
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Evaluate the rule against the current coordinates of the parents.
    ///
    /// Returns `None` for free points or when the parent count does not match
    /// the rule's arity.
    pub fn evaluate(&self, parents: &[Coord]) -> Option<Coord> {
        match (self, parents) {
            (Self::Midpoint, [a, b]) => Some(Coord::midpoint(*a, *b)),
            (Self::Projection { distance }, [origin, through]) => {
                Some(Coord::project_through(*origin, *through, *distance))
            }
            _ => None,
        }
    }
}

/// A node in the point dependency graph.
#[derive(Clone, Debug)]
pub struct PointNode {
    pub(crate) coord: Coord,
    pub(crate) parents: Vec<PointId>,
    pub(crate) children: Vec<PointId>,
    pub(crate) rule: DeriveRule,
}

impl PointNode {
    /// The current coordinate.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Parent points, in the order the derive rule reads them.
    pub fn parents(&self) -> &[PointId] {
        &self.parents
    }

    /// Points that name this one as a parent. A child that names this point
    /// twice appears twice.
    pub fn children(&self) -> &[PointId] {
        &self.children
    }

    pub fn rule(&self) -> DeriveRule {
        self.rule
    }

    /// Returns `true` if this node has no parents.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}
