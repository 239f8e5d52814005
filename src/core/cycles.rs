//! Circular dependency detection.
//!
//! A depth-first traversal runs from every task in insertion order. Whenever
//! it meets an edge back to a task that is still on the traversal stack, the
//! task at the far end of that edge is flagged. Only that entry point is
//! reported; the other members of the cycle are not. Callers rely on this
//! narrower set, so it is not widened to full strongly connected components.

use crate::core::graph::DependencyGraph;
use crate::core::task::TaskId;
use crate::zlog_trace;
use petgraph::visit::{depth_first_search, DfsEvent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Task ids flagged as entry points of a dependency cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleSet(BTreeSet<TaskId>);

impl CycleSet {
    pub fn contains(&self, id: &TaskId) -> bool {
        self.0.contains(id)
    }

    /// Like [`contains`](Self::contains), for tasks that may lack an id.
    pub fn flags(&self, id: Option<&TaskId>) -> bool {
        id.is_some_and(|id| self.contains(id))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Flagged ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &TaskId> {
        self.0.iter()
    }
}

impl FromIterator<TaskId> for CycleSet {
    fn from_iter<I: IntoIterator<Item = TaskId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Find tasks participating in a dependency cycle (entry points only).
///
/// Deterministic for a given graph: roots are visited in insertion order and
/// each task's dependencies in list order.
pub fn find_circular_dependencies(graph: &DependencyGraph) -> CycleSet {
    let dag = graph.petgraph();
    let roots: Vec<_> = graph.ids().filter_map(|id| graph.node(id)).collect();
    let mut in_cycle = BTreeSet::new();

    depth_first_search(dag, roots, |event| {
        if let DfsEvent::BackEdge(from, to) = event {
            zlog_trace!("Back edge {} -> {}", dag[from], dag[to]);
            in_cycle.insert(dag[to].clone());
        }
    });

    CycleSet(in_cycle)
}
