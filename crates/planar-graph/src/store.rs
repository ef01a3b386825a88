//! The arena that owns every point of a board.
//!
//! [`PointStore`] stores nodes in a `Vec` indexed by [`PointId`] and keeps a
//! forward-edge index (`children`) on every node for descendant walks.
//!
//! # Invariants
//!
//! - The store only grows; nodes are never removed.
//! - Every parent of a node has a smaller index than the node itself.
//! - A node appears in each parent's `children` once per parent edge.

use std::collections::VecDeque;

use planar_types::Coord;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::node::{DeriveRule, PointId, PointNode};

/// Owner of all point nodes.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    pub(crate) nodes: Vec<PointNode>,
}

impl PointStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of points ever created.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no point has been created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// Create a root point at `coord`.
    pub fn create_root(&mut self, coord: Coord) -> PointId {
        let id = PointId::from_index(self.nodes.len());
        self.nodes.push(PointNode {
            coord,
            parents: Vec::new(),
            children: Vec::new(),
            rule: DeriveRule::Free,
        });
        debug!(point = %id, %coord, "created root point");
        id
    }

    /// Create a point derived from `parents` by `rule`.
    ///
    /// The parents must already exist and their count must match the rule's
    /// arity. The new point's initial coordinate is computed from the
    /// parents' current coordinates, and the point is appended to each
    /// parent's child list.
    pub fn create_derived(&mut self, parents: &[PointId], rule: DeriveRule) -> GraphResult<PointId> {
        if rule.is_free() || rule.arity() != parents.len() {
            return Err(GraphError::ArityMismatch {
                rule,
                expected: rule.arity(),
                actual: parents.len(),
            });
        }
        let parent_coords = parents
            .iter()
            .map(|p| self.coord(*p).ok_or(GraphError::PointNotFound(*p)))
            .collect::<GraphResult<Vec<Coord>>>()?;
        let coord = rule.evaluate(&parent_coords).ok_or(GraphError::ArityMismatch {
            rule,
            expected: rule.arity(),
            actual: parents.len(),
        })?;

        let id = PointId::from_index(self.nodes.len());
        for parent in parents {
            self.nodes[parent.index()].children.push(id);
        }
        self.nodes.push(PointNode {
            coord,
            parents: parents.to_vec(),
            children: Vec::new(),
            rule,
        });
        debug!(point = %id, ?rule, %coord, "created derived point");
        Ok(id)
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// Retrieve a node.
    pub fn get(&self, id: PointId) -> Option<&PointNode> {
        self.nodes.get(id.index())
    }

    /// Current coordinate of a point.
    pub fn coord(&self, id: PointId) -> Option<Coord> {
        self.get(id).map(PointNode::coord)
    }

    /// Returns `true` if `id` belongs to this store.
    pub fn contains(&self, id: PointId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Iterate over all points in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &PointNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (PointId::from_index(i), node))
    }

    /// Every point reachable from `roots` through child edges, including the
    /// roots themselves, in breadth-first order.
    ///
    /// Ids that are not part of the store are skipped.
    pub fn reachable_from(&self, roots: &[PointId]) -> Vec<PointId> {
        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        for root in roots {
            if self.contains(*root) && !visited[root.index()] {
                visited[root.index()] = true;
                queue.push_back(*root);
            }
        }

        while let Some(current) = queue.pop_front() {
            result.push(current);
            for child in &self.nodes[current.index()].children {
                if !visited[child.index()] {
                    visited[child.index()] = true;
                    queue.push_back(*child);
                }
            }
        }

        result
    }

    // ---------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------

    /// Validate the store's structural integrity.
    ///
    /// Checks that:
    /// - Every parent precedes its child (the graph is acyclic).
    /// - Each rule's arity matches its parent count.
    /// - The children index mirrors the parent edges exactly.
    pub fn validate(&self) -> GraphResult<()> {
        let mut expected_children: Vec<Vec<PointId>> = vec![Vec::new(); self.nodes.len()];

        for (id, node) in self.iter() {
            if node.rule.arity() != node.parents.len() {
                return Err(GraphError::Inconsistent {
                    node: id,
                    reason: format!(
                        "{:?} with {} parents",
                        node.rule,
                        node.parents.len()
                    ),
                });
            }
            for parent in &node.parents {
                if parent.index() >= id.index() {
                    return Err(GraphError::Inconsistent {
                        node: id,
                        reason: format!("parent {parent} does not precede it"),
                    });
                }
                expected_children[parent.index()].push(id);
            }
        }

        for (id, node) in self.iter() {
            let mut actual = node.children.clone();
            let mut expected = std::mem::take(&mut expected_children[id.index()]);
            actual.sort();
            expected.sort();
            if actual != expected {
                return Err(GraphError::Inconsistent {
                    node: id,
                    reason: "children index does not match parent edges".into(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn empty_store() {
        let store = PointStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        store.validate().unwrap();
    }

    #[test]
    fn root_points_have_no_parents() {
        let mut store = PointStore::new();
        let a = store.create_root(c(1.0, 2.0));
        let node = store.get(a).unwrap();
        assert!(node.is_root());
        assert_eq!(node.rule(), DeriveRule::Free);
        assert_eq!(node.coord(), c(1.0, 2.0));
    }

    #[test]
    fn derived_point_gets_initial_coordinate() {
        let mut store = PointStore::new();
        let a = store.create_root(c(0.0, 0.0));
        let b = store.create_root(c(10.0, 0.0));
        let m = store.create_derived(&[a, b], DeriveRule::Midpoint).unwrap();
        assert_eq!(store.coord(m), Some(c(5.0, 0.0)));
        assert_eq!(store.get(m).unwrap().parents(), &[a, b]);
    }

    #[test]
    fn derived_point_is_registered_as_child() {
        let mut store = PointStore::new();
        let a = store.create_root(c(0.0, 0.0));
        let b = store.create_root(c(1.0, 0.0));
        let m = store.create_derived(&[a, b], DeriveRule::Midpoint).unwrap();
        assert_eq!(store.get(a).unwrap().children(), &[m]);
        assert_eq!(store.get(b).unwrap().children(), &[m]);
        store.validate().unwrap();
    }

    #[test]
    fn repeated_parent_records_two_edges() {
        let mut store = PointStore::new();
        let a = store.create_root(c(3.0, 3.0));
        let m = store.create_derived(&[a, a], DeriveRule::Midpoint).unwrap();
        assert_eq!(store.get(a).unwrap().children(), &[m, m]);
        assert_eq!(store.coord(m), Some(c(3.0, 3.0)));
        store.validate().unwrap();
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let mut store = PointStore::new();
        let a = store.create_root(c(0.0, 0.0));
        let result = store.create_derived(&[a], DeriveRule::Midpoint);
        assert!(matches!(
            result,
            Err(GraphError::ArityMismatch { expected: 2, actual: 1, .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn free_rule_cannot_have_parents() {
        let mut store = PointStore::new();
        let a = store.create_root(c(0.0, 0.0));
        let result = store.create_derived(&[a, a], DeriveRule::Free);
        assert!(matches!(result, Err(GraphError::ArityMismatch { .. })));
    }

    #[test]
    fn unknown_parent_is_rejected_without_mutation() {
        let mut store = PointStore::new();
        let a = store.create_root(c(0.0, 0.0));
        let ghost = PointId::from_index(9);
        let result = store.create_derived(&[a, ghost], DeriveRule::Midpoint);
        assert_eq!(result, Err(GraphError::PointNotFound(ghost)));
        assert_eq!(store.len(), 1);
        assert!(store.get(a).unwrap().children().is_empty());
    }

    #[test]
    fn reachable_includes_roots_and_descendants() {
        let mut store = PointStore::new();
        let a = store.create_root(c(0.0, 0.0));
        let b = store.create_root(c(1.0, 0.0));
        let other = store.create_root(c(5.0, 5.0));
        let m1 = store.create_derived(&[a, b], DeriveRule::Midpoint).unwrap();
        let m2 = store.create_derived(&[m1, other], DeriveRule::Midpoint).unwrap();

        let reach = store.reachable_from(&[a]);
        assert_eq!(reach, vec![a, m1, m2]);
        assert!(!reach.contains(&b));
        assert!(!reach.contains(&other));
    }

    #[test]
    fn reachable_skips_foreign_ids() {
        let mut store = PointStore::new();
        let a = store.create_root(c(0.0, 0.0));
        let reach = store.reachable_from(&[a, PointId::from_index(42)]);
        assert_eq!(reach, vec![a]);
    }

    #[test]
    fn validate_detects_broken_children_index() {
        let mut store = PointStore::new();
        let a = store.create_root(c(0.0, 0.0));
        let b = store.create_root(c(1.0, 0.0));
        store.create_derived(&[a, b], DeriveRule::Midpoint).unwrap();
        store.nodes[a.index()].children.clear();
        assert!(matches!(store.validate(), Err(GraphError::Inconsistent { node, .. }) if node == a));
    }
}
