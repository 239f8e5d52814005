//! Ranking pipeline for a batch of tasks.
//!
//! The [`Analyzer`] builds the dependency graph and the cycle set once per
//! batch, scores and explains every task against them, and sorts the result.
//! It also owns the caller-facing input contract ([`parse_batch`]) and the
//! "what should I do today" suggestion flow.

use crate::core::cycles::{find_circular_dependencies, CycleSet};
use crate::core::graph::DependencyGraph;
use crate::core::task::{NormalizeOptions, RawTask, Task, TaskId};
use crate::error::{Error, Result};
use crate::scoring::{explain, ComponentScores, Strategy};
use crate::{zlog, zlog_debug, zlog_warn};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const BATCH_SHAPE_ERROR: &str = "Expected a list of tasks or {'tasks': [...]}";

/// A task with its final score and explanation attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    /// Rounded to two decimals.
    pub score: f64,
    pub explanation: String,
}

/// Result of ranking a whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The strategy name exactly as requested.
    pub strategy: String,
    pub has_circular_dependencies: bool,
    pub circular_task_ids: Vec<TaskId>,
    /// Highest score first.
    pub tasks: Vec<ScoredTask>,
}

/// The top few tasks of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionReport {
    pub strategy: String,
    /// True when the caller sent no tasks and the built-in sample was ranked.
    pub used_sample_data: bool,
    pub has_circular_dependencies: bool,
    pub circular_task_ids: Vec<TaskId>,
    pub suggested_tasks: Vec<ScoredTask>,
}

/// Scores batches of tasks for one strategy and one reference date.
#[derive(Debug, Clone)]
pub struct Analyzer {
    strategy_name: String,
    strategy: Strategy,
    today: NaiveDate,
}

struct Ranking {
    cycles: CycleSet,
    tasks: Vec<ScoredTask>,
}

impl Analyzer {
    /// Create an analyzer.
    ///
    /// `strategy_name` is echoed back verbatim in reports; unknown names are
    /// scored as `smart_balance`. `today` is captured once so every task in a
    /// batch sees the same date.
    pub fn new(strategy_name: &str, today: NaiveDate) -> Self {
        Self {
            strategy_name: strategy_name.to_string(),
            strategy: Strategy::from_name(strategy_name),
            today,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Rank every task in the batch.
    pub fn analyze(&self, tasks: Vec<Task>) -> AnalysisReport {
        let ranking = self.rank(tasks);
        AnalysisReport {
            strategy: self.strategy_name.clone(),
            has_circular_dependencies: !ranking.cycles.is_empty(),
            circular_task_ids: ranking.cycles.ids().cloned().collect(),
            tasks: ranking.tasks,
        }
    }

    /// Rank the batch and keep the best `limit` tasks.
    ///
    /// An empty batch is replaced by [`sample_tasks`] so there is always
    /// something to suggest.
    pub fn suggest(&self, tasks: Vec<Task>, limit: usize) -> SuggestionReport {
        let used_sample_data = tasks.is_empty();
        let tasks = if used_sample_data {
            zlog!("No tasks supplied, suggesting from sample data");
            sample_tasks(self.today)
        } else {
            tasks
        };

        let mut ranking = self.rank(tasks);
        ranking.tasks.truncate(limit);

        SuggestionReport {
            strategy: self.strategy_name.clone(),
            used_sample_data,
            has_circular_dependencies: !ranking.cycles.is_empty(),
            circular_task_ids: ranking.cycles.ids().cloned().collect(),
            suggested_tasks: ranking.tasks,
        }
    }

    fn rank(&self, tasks: Vec<Task>) -> Ranking {
        let graph = DependencyGraph::from_tasks(&tasks);
        let cycles = find_circular_dependencies(&graph);
        zlog_debug!(
            "Ranking {} tasks with {} ({:?}), today={}",
            tasks.len(),
            self.strategy,
            graph,
            self.today
        );
        if !cycles.is_empty() {
            zlog_warn!("Circular dependencies detected at {} task(s)", cycles.len());
        }

        let mut scored: Vec<ScoredTask> = tasks
            .into_iter()
            .map(|task| {
                let components = ComponentScores::compute(&task, &graph, self.today);
                let score = self.strategy.apply(&components);
                let is_circular = cycles.flags(task.id.as_ref());
                zlog_debug!("Task {:?}: {:?} -> {}", task.title, components, score);
                ScoredTask {
                    explanation: explain(&components, self.strategy, is_circular),
                    score,
                    task,
                }
            })
            .collect();

        // `sort_by` is stable, so equal scores keep their input order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ranking {
            cycles,
            tasks: scored,
        }
    }
}

/// Extract and normalize a batch from caller input.
///
/// Accepts a bare array of task objects or an object with a `"tasks"` array.
pub fn parse_batch(value: &Value, options: NormalizeOptions) -> Result<Vec<Task>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("tasks") {
            Some(Value::Array(items)) => items,
            _ => return Err(Error::InvalidInput(BATCH_SHAPE_ERROR.to_string())),
        },
        _ => return Err(Error::InvalidInput(BATCH_SHAPE_ERROR.to_string())),
    };

    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            if !item.is_object() {
                return Err(Error::InvalidInput(format!(
                    "Task at position {} is not an object",
                    position
                )));
            }
            let raw: RawTask = serde_json::from_value(item.clone())?;
            Ok(raw.normalize(position, options))
        })
        .collect()
}

/// A small built-in batch, dated relative to `today`.
pub fn sample_tasks(today: NaiveDate) -> Vec<Task> {
    let in_days = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(today);
    vec![
        Task::new(1, "Reply to important emails")
            .with_due_date(today)
            .with_estimated_hours(1.0)
            .with_importance(8),
        Task::new(2, "Finish project report")
            .with_due_date(in_days(1))
            .with_estimated_hours(4.0)
            .with_importance(9),
        Task::new(3, "Refactor legacy code")
            .with_due_date(in_days(3))
            .with_estimated_hours(3.0)
            .with_importance(7),
        Task::new(4, "Quick UI bug fix")
            .with_due_date(today)
            .with_estimated_hours(0.5)
            .with_importance(6),
    ]
}
