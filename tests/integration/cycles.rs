//! Circular dependency reporting through the full pipeline.

use serde_json::json;

use taskrank::core::task::TaskId;

use crate::fixtures::analyze;

/// Test: Mutual dependency detected
/// Given task 1 depends on 2 and task 2 depends on 1
/// When the batch is analyzed
/// Then the cycle set is non-empty and names one of them
#[test]
fn test_mutual_dependency_detected() {
    let report = analyze(
        json!([
            {"id": 1, "title": "Task A", "due_date": null, "estimated_hours": 1, "importance": 5, "dependencies": [2]},
            {"id": 2, "title": "Task B", "due_date": null, "estimated_hours": 1, "importance": 5, "dependencies": [1]}
        ]),
        "smart_balance",
    );

    assert!(report.has_circular_dependencies);
    assert!(!report.circular_task_ids.is_empty());
    assert!(
        report.circular_task_ids.contains(&TaskId::from(1))
            || report.circular_task_ids.contains(&TaskId::from(2))
    );
}

#[test]
fn test_cycle_does_not_stop_scoring() {
    let report = analyze(
        json!([
            {"id": "a", "title": "A", "dependencies": ["b"]},
            {"id": "b", "title": "B", "dependencies": ["c"]},
            {"id": "c", "title": "C", "dependencies": ["a"]},
            {"id": "d", "title": "D"}
        ]),
        "smart_balance",
    );

    assert_eq!(report.tasks.len(), 4);
    assert_eq!(report.circular_task_ids, vec![TaskId::from("a")]);
    for scored in &report.tasks {
        assert!(scored.score > 0.0);
    }
}

#[test]
fn test_only_flagged_tasks_get_warning() {
    let report = analyze(
        json!([
            {"id": 1, "title": "root", "dependencies": [2]},
            {"id": 2, "title": "loop-head", "dependencies": [3]},
            {"id": 3, "title": "loop-tail", "dependencies": [2]}
        ]),
        "high_impact",
    );

    assert_eq!(report.circular_task_ids, vec![TaskId::from(2)]);
    for scored in &report.tasks {
        let warned = scored.explanation.contains("⚠ This task is part of a circular dependency chain");
        assert_eq!(warned, scored.task.title == "loop-head", "{}", scored.task.title);
    }
}

#[test]
fn test_acyclic_batch_reports_nothing() {
    let report = analyze(
        json!([
            {"id": 1, "title": "a", "dependencies": [2, 3]},
            {"id": 2, "title": "b", "dependencies": [3]},
            {"id": 3, "title": "c", "dependencies": [99]}
        ]),
        "smart_balance",
    );

    assert!(!report.has_circular_dependencies);
    assert!(report.circular_task_ids.is_empty());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["has_circular_dependencies"], json!(false));
    assert_eq!(json["circular_task_ids"], json!([]));
}
