//! Incremental recompute after moving points.
//!
//! [`PointStore::move_points`] relocates a set of points and recomputes every
//! point that transitively depends on them, each exactly once and only after
//! all of its affected parents have settled. It is Kahn's algorithm
//! restricted to the subgraph reachable from the moved points:
//!
//! 1. Discovery: breadth-first over child edges from the moved points,
//!    counting for each reached node how many of its parent edges come from
//!    another reached node.
//! 2. Recompute: breadth-first again from the moved points; a node is
//!    recomputed when the last of its counted parent edges is released.
//!
//! Edges from parents outside the reachable subgraph are never counted, so
//! those parents simply keep their current coordinate.
//!
//! Moved points are pinned for the duration of the call. A moved point keeps
//! the coordinate it was given even if it has a derive rule or is downstream
//! of another moved point; the next call that reaches it through a parent
//! will recompute it again.

use std::collections::VecDeque;

use planar_types::Coord;
use tracing::{debug, trace, warn};

use crate::error::{GraphError, GraphResult};
use crate::node::PointId;
use crate::report::PropagationReport;
use crate::store::PointStore;

impl PointStore {
    /// Move `roots` to `coords` (parallel lists) and recompute everything
    /// that depends on them.
    ///
    /// All ids are checked before anything is written, so an error leaves the
    /// store untouched. When a point appears more than once in `roots`, its
    /// last coordinate wins.
    pub fn move_points(&mut self, roots: &[PointId], coords: &[Coord]) -> GraphResult<PropagationReport> {
        if roots.is_empty() {
            return Err(GraphError::EmptyRootSet);
        }
        if roots.len() != coords.len() {
            return Err(GraphError::LengthMismatch {
                points: roots.len(),
                coords: coords.len(),
            });
        }
        if let Some(missing) = roots.iter().find(|id| !self.contains(**id)) {
            return Err(GraphError::PointNotFound(*missing));
        }

        let total = self.nodes.len();
        let mut pinned = vec![false; total];
        let mut report = PropagationReport::default();

        for (id, coord) in roots.iter().zip(coords) {
            let node = &mut self.nodes[id.index()];
            node.coord = *coord;
            if !pinned[id.index()] {
                pinned[id.index()] = true;
                report.moved.push(*id);
                if !node.rule.is_free() {
                    warn!(point = %id, rule = ?node.rule, "moving a derived point directly");
                }
            }
        }

        let indegree = self.count_reachable_parents(&report.moved, &pinned);
        self.recompute(&report.moved, &pinned, indegree, &mut report.recomputed);

        debug!(
            moved = report.moved.len(),
            recomputed = report.recomputed.len(),
            "propagated point move"
        );
        Ok(report)
    }

    /// Discovery phase: for every node reachable from `seeds`, count the
    /// parent edges whose source is also reachable.
    fn count_reachable_parents(&self, seeds: &[PointId], pinned: &[bool]) -> Vec<u32> {
        let mut indegree = vec![0u32; self.nodes.len()];
        let mut discovered = pinned.to_vec();
        let mut queue: VecDeque<PointId> = VecDeque::with_capacity(self.nodes.len());
        queue.extend(seeds.iter().copied());

        while let Some(current) = queue.pop_front() {
            for child in &self.nodes[current.index()].children {
                if pinned[child.index()] {
                    continue;
                }
                if !discovered[child.index()] {
                    discovered[child.index()] = true;
                    queue.push_back(*child);
                }
                indegree[child.index()] += 1;
            }
        }

        indegree
    }

    /// Recompute phase: release nodes in dependency order and re-derive each
    /// one once all of its counted parents are final.
    fn recompute(
        &mut self,
        seeds: &[PointId],
        pinned: &[bool],
        mut indegree: Vec<u32>,
        order: &mut Vec<PointId>,
    ) {
        let mut queue: VecDeque<PointId> = VecDeque::with_capacity(self.nodes.len());
        queue.extend(seeds.iter().copied());

        while let Some(current) = queue.pop_front() {
            if !pinned[current.index()] {
                self.rederive(current);
                order.push(current);
            }

            for child in &self.nodes[current.index()].children {
                if pinned[child.index()] {
                    continue;
                }
                let remaining = &mut indegree[child.index()];
                *remaining -= 1;
                if *remaining == 0 {
                    queue.push_back(*child);
                }
            }
        }
    }

    /// Overwrite a derived node's coordinate from its parents' current ones.
    fn rederive(&mut self, id: PointId) {
        let node = &self.nodes[id.index()];
        let parent_coords: Vec<Coord> = node
            .parents
            .iter()
            .map(|p| self.nodes[p.index()].coord)
            .collect();
        if let Some(coord) = node.rule.evaluate(&parent_coords) {
            trace!(point = %id, %coord, "recomputed");
            self.nodes[id.index()].coord = coord;
        }
    }
}
