//! Core data model for a ranking request.
//!
//! This module contains the task records, the dependency graph built from
//! them, and the circular dependency detector that runs over that graph.

pub mod cycles;
pub mod graph;
pub mod task;

pub use cycles::{find_circular_dependencies, CycleSet};
pub use graph::DependencyGraph;
pub use task::{parse_due_date, NormalizeOptions, RawTask, Task, TaskId};
