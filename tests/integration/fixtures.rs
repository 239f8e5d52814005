//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - A fixed reference date
//! - Building task batches from JSON
//! - Predefined task sets

use chrono::NaiveDate;
use serde_json::{json, Value};

use taskrank::core::task::{NormalizeOptions, Task};
use taskrank::{parse_batch, AnalysisReport, Analyzer};

/// The reference date used throughout the suite.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

/// Parse and normalize a JSON batch with default options.
pub fn batch(value: Value) -> Vec<Task> {
    parse_batch(&value, NormalizeOptions::default()).expect("valid batch")
}

/// Rank a JSON batch with the given strategy on the suite's reference date.
pub fn analyze(value: Value, strategy: &str) -> AnalysisReport {
    Analyzer::new(strategy, today()).analyze(batch(value))
}

/// Score of the task with the given title in a report.
pub fn score_of(report: &AnalysisReport, title: &str) -> f64 {
    report
        .tasks
        .iter()
        .find(|t| t.task.title == title)
        .map(|t| t.score)
        .unwrap_or_else(|| panic!("no task titled {:?}", title))
}

/// Titles in report order.
pub fn titles(report: &AnalysisReport) -> Vec<String> {
    report.tasks.iter().map(|t| t.task.title.clone()).collect()
}

/// A realistic mixed batch: overdue, due today, upcoming, undated, blocked.
pub fn sprint_backlog() -> Value {
    json!([
        {"id": 1, "title": "Fix login outage", "due_date": "2025-05-30", "estimated_hours": 3, "importance": 9, "dependencies": []},
        {"id": 2, "title": "Write release notes", "due_date": "2025-06-01", "estimated_hours": 0.5, "importance": 4, "dependencies": [1]},
        {"id": 3, "title": "Design schema", "due_date": "2025-06-05", "estimated_hours": 6, "importance": 8, "dependencies": []},
        {"id": 4, "title": "Build API", "due_date": "2025-06-10", "estimated_hours": 8, "importance": 8, "dependencies": [3]},
        {"id": 5, "title": "Build UI", "due_date": "2025-06-12", "estimated_hours": 8, "importance": 7, "dependencies": [3, 4]},
        {"id": 6, "title": "Tidy README", "estimated_hours": 1, "importance": 2, "dependencies": []}
    ])
}
