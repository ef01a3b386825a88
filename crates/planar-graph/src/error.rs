//! Error types for the point dependency graph.

use crate::node::{DeriveRule, PointId};

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A referenced point is not part of this store.
    #[error("point not found: {0}")]
    PointNotFound(PointId),

    /// A derive rule was given the wrong number of parents.
    #[error("{rule:?} expects {expected} parents, got {actual}")]
    ArityMismatch {
        /// The rule being attached.
        rule: DeriveRule,
        /// The number of parents the rule reads.
        expected: usize,
        /// The number of parents supplied.
        actual: usize,
    },

    /// `move_points` was called with no points.
    #[error("no points to move")]
    EmptyRootSet,

    /// `move_points` was given differently sized point and coordinate lists.
    #[error("{points} points but {coords} destination coordinates")]
    LengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of coordinates supplied.
        coords: usize,
    },

    /// The parent and child indexes disagree.
    #[error("inconsistent graph at {node}: {reason}")]
    Inconsistent {
        /// The node where the inconsistency was found.
        node: PointId,
        /// What is wrong.
        reason: String,
    },
}

/// Convenience alias for graph results.
pub type GraphResult<T> = Result<T, GraphError>;
