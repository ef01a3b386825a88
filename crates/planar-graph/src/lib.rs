//! Point dependency graph for Planar.
//!
//! Every point on a board lives in a [`PointStore`]. Root points carry a
//! literal coordinate; derived points carry a [`DeriveRule`] that computes
//! their coordinate from a fixed list of parent points. The store keeps a
//! forward-edge index (`children`) so that [`PointStore::move_points`] can
//! walk only the part of the graph that depends on the points being moved.
//!
//! # Invariants
//!
//! - The graph is acyclic: a derived point may only name existing points as
//!   parents, and parents never change after creation.
//! - Nodes are never removed, so a [`PointId`] stays valid for the lifetime
//!   of its store.

pub mod error;
pub mod node;
pub mod propagate;
pub mod report;
pub mod store;

pub use error::{GraphError, GraphResult};
pub use node::{DeriveRule, PointId, PointNode};
pub use report::PropagationReport;
pub use store::PointStore;
