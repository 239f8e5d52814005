//! Scoring engine.
//!
//! Component scores are computed per task, folded into one number by a
//! [`Strategy`], and explained in plain language.

pub mod components;
pub mod explain;
pub mod strategy;

pub use components::ComponentScores;
pub use explain::explain;
pub use strategy::{Strategy, Weights};

use crate::core::graph::DependencyGraph;
use crate::core::task::Task;
use chrono::NaiveDate;

/// Score a single task without building an explanation.
pub fn score_task(task: &Task, strategy: Strategy, graph: &DependencyGraph, today: NaiveDate) -> f64 {
    strategy.apply(&ComponentScores::compute(task, graph, today))
}
