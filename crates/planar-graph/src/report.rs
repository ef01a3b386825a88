//! Summary of a single propagation call.

use crate::node::PointId;

/// What a call to [`PointStore::move_points`](crate::PointStore::move_points)
/// touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Distinct points that were relocated directly, in request order.
    pub moved: Vec<PointId>,
    /// Derived points that were recomputed, in recompute order.
    pub recomputed: Vec<PointId>,
}

impl PropagationReport {
    /// Total number of points whose coordinate was written.
    pub fn affected(&self) -> usize {
        self.moved.len() + self.recomputed.len()
    }

    /// Returns `true` if nothing downstream of the moved points needed work.
    pub fn is_local(&self) -> bool {
        self.recomputed.is_empty()
    }

    /// How many times `id` was recomputed during the call.
    pub fn recompute_count(&self, id: PointId) -> usize {
        self.recomputed.iter().filter(|p| **p == id).count()
    }

    /// Position of `id` in the recompute order, if it was recomputed.
    pub fn recompute_position(&self, id: PointId) -> Option<usize> {
        self.recomputed.iter().position(|p| *p == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_local() {
        let report = PropagationReport::default();
        assert!(report.is_local());
        assert_eq!(report.affected(), 0);
    }

    #[test]
    fn counts_and_positions() {
        let a = PointId::from_index(0);
        let b = PointId::from_index(1);
        let c = PointId::from_index(2);
        let report = PropagationReport {
            moved: vec![a],
            recomputed: vec![b, c],
        };
        assert_eq!(report.affected(), 3);
        assert_eq!(report.recompute_count(b), 1);
        assert_eq!(report.recompute_count(a), 0);
        assert_eq!(report.recompute_position(c), Some(1));
        assert_eq!(report.recompute_position(a), None);
    }
}
