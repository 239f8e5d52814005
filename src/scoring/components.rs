//! Per-task component scores.
//!
//! Each task is scored on four independent axes. None of them looks at other
//! tasks' scores; only the dependency axis reads the shared graph, and only
//! the urgency axis reads the request date.

use crate::core::graph::DependencyGraph;
use crate::core::task::{Task, MAX_IMPORTANCE, MIN_ESTIMATED_HOURS, MIN_IMPORTANCE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency for a task due on the request date.
pub const DUE_TODAY_URGENCY: f64 = 14.0;
/// Ceiling for overdue urgency.
pub const MAX_OVERDUE_URGENCY: f64 = 15.0;
/// Dependency score ceiling.
pub const MAX_DEPENDENCY_SCORE: f64 = 10.0;

/// The four component scores for one task.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentScores {
    #[serde(rename = "importance_score")]
    pub importance: f64,
    #[serde(rename = "urgency_score")]
    pub urgency: f64,
    #[serde(rename = "effort_score")]
    pub effort: f64,
    #[serde(rename = "dependency_score")]
    pub dependency: f64,
}

impl ComponentScores {
    /// Compute all four components for a task.
    ///
    /// `today` is the request date; pass the same value for every task in a
    /// batch so their urgency scores are comparable.
    pub fn compute(task: &Task, graph: &DependencyGraph, today: NaiveDate) -> Self {
        let dependents = task
            .id
            .as_ref()
            .map(|id| graph.dependents_count(id))
            .unwrap_or(0);

        Self {
            importance: importance_score(i64::from(task.importance)),
            urgency: urgency_score(task.due_date, today),
            effort: effort_score(task.estimated_hours),
            dependency: dependency_score(dependents),
        }
    }
}

/// Importance clamped to 1..=10.
pub fn importance_score(importance: i64) -> f64 {
    importance.clamp(MIN_IMPORTANCE, MAX_IMPORTANCE) as f64
}

/// Low effort scores high: anything up to an hour gets the full 10, longer
/// tasks lose a point per hour down to a floor of 1.
pub fn effort_score(estimated_hours: f64) -> f64 {
    let hours = estimated_hours.max(MIN_ESTIMATED_HOURS);
    if hours <= 1.0 {
        10.0
    } else {
        (10.0 - hours).max(1.0)
    }
}

/// Urgency from the number of whole days until the due date.
///
/// Overdue tasks start at 10 and gain half a point per day late (capped at
/// 15), tasks due today get 14, and future tasks lose 0.7 per day from 10.
pub fn urgency_score(due_date: Option<NaiveDate>, today: NaiveDate) -> f64 {
    let Some(due_date) = due_date else {
        return 0.0;
    };

    let days = (due_date - today).num_days();
    if days < 0 {
        (10.0 + days.unsigned_abs() as f64 * 0.5).min(MAX_OVERDUE_URGENCY)
    } else if days == 0 {
        DUE_TODAY_URGENCY
    } else {
        (10.0 - days as f64 * 0.7).max(0.0)
    }
}

/// Two points per dependent task, capped at 10.
pub fn dependency_score(dependents: usize) -> f64 {
    (dependents as f64 * 2.0).min(MAX_DEPENDENCY_SCORE)
}
