//! Dependency graph for one ranking request.
//!
//! The graph keeps two views of the same data: an insertion-ordered adjacency
//! list (task id -> ids it depends on, verbatim) and a petgraph `DiGraph`
//! mirror with one edge per distinct `task -> dependency` pair. The mirror
//! answers reverse lookups ("who waits on me?") and drives the cycle
//! detector. Referenced ids that are not tasks in the batch still get a node
//! so that edges to them can be represented, but they are never roots.

use crate::core::task::{Task, TaskId};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// The task dependency graph.
pub struct DependencyGraph {
    /// Task ids in first-seen order, each with its dependency list.
    adjacency: Vec<(TaskId, Vec<TaskId>)>,
    /// Position of each task id in `adjacency`.
    positions: HashMap<TaskId, usize>,
    /// Edge `a -> b` means task `a` depends on `b`.
    graph: DiGraph<TaskId, ()>,
    /// Index mapping from TaskId to NodeIndex for fast lookups.
    node_index: HashMap<TaskId, NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            positions: HashMap::new(),
            graph: DiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Build the graph from a batch of normalized tasks.
    ///
    /// Tasks without an id are skipped. Dependency ids are recorded as given,
    /// without checking that they name a task in the batch. If an id appears
    /// twice, the first occurrence fixes its position and the last one
    /// supplies the dependency list.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut adjacency: Vec<(TaskId, Vec<TaskId>)> = Vec::with_capacity(tasks.len());
        let mut positions: HashMap<TaskId, usize> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let Some(id) = &task.id else {
                continue;
            };
            match positions.get(id) {
                Some(&position) => adjacency[position].1 = task.dependencies.clone(),
                None => {
                    positions.insert(id.clone(), adjacency.len());
                    adjacency.push((id.clone(), task.dependencies.clone()));
                }
            }
        }

        let mut graph = DiGraph::new();
        let mut node_index = HashMap::with_capacity(adjacency.len());
        for (id, _) in &adjacency {
            node_index.insert(id.clone(), graph.add_node(id.clone()));
        }

        for (id, dependencies) in &adjacency {
            let from = node_index[id];
            let mut seen = HashSet::new();
            let distinct: Vec<&TaskId> = dependencies.iter().filter(|d| seen.insert(*d)).collect();

            // petgraph lists neighbours newest edge first, so add edges in
            // reverse to keep traversal in dependency-list order.
            for dependency in distinct.into_iter().rev() {
                let to = *node_index
                    .entry(dependency.clone())
                    .or_insert_with(|| graph.add_node(dependency.clone()));
                graph.add_edge(from, to, ());
            }
        }

        Self {
            adjacency,
            positions,
            graph,
            node_index,
        }
    }

    /// Task ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &TaskId> {
        self.adjacency.iter().map(|(id, _)| id)
    }

    /// The dependency list recorded for a task, or an empty slice.
    pub fn dependencies_of(&self, id: &TaskId) -> &[TaskId] {
        self.positions
            .get(id)
            .map(|&position| self.adjacency[position].1.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct tasks that list `id` among their dependencies.
    pub fn dependents_count(&self, id: &TaskId) -> usize {
        self.node_index
            .get(id)
            .map(|&index| {
                self.graph
                    .neighbors_directed(index, Direction::Incoming)
                    .count()
            })
            .unwrap_or(0)
    }

    /// Check if the graph has an entry for this task.
    pub fn contains(&self, id: &TaskId) -> bool {
        self.positions.contains_key(id)
    }

    /// Number of tasks (graph keys).
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of distinct dependency edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn node(&self, id: &TaskId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    pub(crate) fn petgraph(&self) -> &DiGraph<TaskId, ()> {
        &self.graph
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DependencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyGraph")
            .field("tasks", &self.len())
            .field("edges", &self.edge_count())
            .finish()
    }
}
