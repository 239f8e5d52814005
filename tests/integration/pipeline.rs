//! Input contract, determinism and round-trips.

use serde_json::{json, Value};

use taskrank::core::task::{NormalizeOptions, TaskId};
use taskrank::core::DependencyGraph;
use taskrank::{parse_batch, score_task, Analyzer, Error, Strategy};

use crate::fixtures::{analyze, batch, score_of, sprint_backlog, today};

#[test]
fn test_wrapped_and_bare_batches_match() {
    let bare = analyze(sprint_backlog(), "smart_balance");
    let wrapped = analyze(json!({ "tasks": sprint_backlog() }), "smart_balance");
    assert_eq!(bare.tasks, wrapped.tasks);
}

#[test]
fn test_unrecognised_shape_is_rejected() {
    let err = parse_batch(&json!({"todo": []}), NormalizeOptions::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("Expected a list of tasks"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = serde_json::to_string(&analyze(sprint_backlog(), "smart_balance")).unwrap();
    let second = serde_json::to_string(&analyze(sprint_backlog(), "smart_balance")).unwrap();
    assert_eq!(first, second);
}

/// Test: Round-trip
/// Given the scored output of one run
/// When it is stripped of score/explanation and analyzed again
/// Then every task gets the same score
#[test]
fn test_scored_output_round_trips() {
    for strategy in Strategy::ALL {
        let report = analyze(sprint_backlog(), strategy.name());

        let mut tasks = serde_json::to_value(&report.tasks).unwrap();
        for task in tasks.as_array_mut().unwrap() {
            let object = task.as_object_mut().unwrap();
            object.remove("score");
            object.remove("explanation");
        }

        let again = analyze(tasks, strategy.name());
        assert_eq!(report.tasks, again.tasks, "{} drifted", strategy);
    }
}

#[test]
fn test_input_order_does_not_change_scores() {
    let forward = analyze(sprint_backlog(), "smart_balance");

    let mut reversed: Vec<Value> = sprint_backlog().as_array().unwrap().clone();
    reversed.reverse();
    let backward = analyze(Value::Array(reversed), "smart_balance");

    for scored in &forward.tasks {
        assert_eq!(scored.score, score_of(&backward, &scored.task.title));
    }
}

#[test]
fn test_equal_scores_keep_input_order() {
    let report = analyze(
        json!([
            {"id": "c", "title": "third"},
            {"id": "a", "title": "first"},
            {"id": "b", "title": "second"}
        ]),
        "deadline_driven",
    );
    let ids: Vec<TaskId> = report.tasks.iter().filter_map(|t| t.task.id.clone()).collect();
    assert_eq!(ids, vec![TaskId::from("c"), TaskId::from("a"), TaskId::from("b")]);
}

#[test]
fn test_bad_due_date_scores_like_no_due_date() {
    let report = analyze(
        json!([
            {"id": 1, "title": "garbled", "due_date": "31/12/2025", "importance": 6},
            {"id": 2, "title": "undated", "importance": 6}
        ]),
        "deadline_driven",
    );
    assert_eq!(score_of(&report, "garbled"), score_of(&report, "undated"));
}

#[test]
fn test_missing_fields_are_defaulted() {
    let report = analyze(json!([{}, {"title": "named"}]), "smart_balance");

    let ids: Vec<Option<TaskId>> = report.tasks.iter().map(|t| t.task.id.clone()).collect();
    assert_eq!(ids, vec![Some(TaskId::from(1)), Some(TaskId::from(2))]);
    assert_eq!(report.tasks[0].task.title, "Task 1");
    // importance 5, effort 10, nothing else: 1.2*5 + 0.8*10
    assert_eq!(report.tasks[0].score, 14.0);
}

#[test]
fn test_strict_ids_leave_anonymous_tasks_out_of_graph() {
    let tasks = parse_batch(
        &json!([
            {"title": "anonymous", "dependencies": [1]},
            {"id": 1, "title": "target"}
        ]),
        NormalizeOptions { strict_ids: true },
    )
    .unwrap();

    assert_eq!(tasks[0].id, None);
    let graph = DependencyGraph::from_tasks(&tasks);
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.dependents_count(&TaskId::from(1)), 0);

    let report = Analyzer::new("smart_balance", today()).analyze(tasks);
    assert_eq!(report.tasks.len(), 2);
}

#[test]
fn test_score_task_matches_analyzer() {
    let tasks = batch(sprint_backlog());
    let graph = DependencyGraph::from_tasks(&tasks);
    let report = Analyzer::new("high_impact", today()).analyze(tasks.clone());

    for task in &tasks {
        let direct = score_task(task, Strategy::HighImpact, &graph, today());
        assert_eq!(direct, score_of(&report, &task.title));
    }
}

#[test]
fn test_suggest_sample_and_real_batches() {
    let analyzer = Analyzer::new("smart_balance", today());

    let sample = analyzer.suggest(Vec::new(), 3);
    assert!(sample.used_sample_data);
    assert_eq!(sample.suggested_tasks.len(), 3);
    assert_eq!(sample.suggested_tasks[0].task.title, "Reply to important emails");
    assert_eq!(sample.suggested_tasks[1].task.title, "Quick UI bug fix");

    let real = analyzer.suggest(batch(sprint_backlog()), 3);
    assert!(!real.used_sample_data);
    let titles: Vec<&str> = real.suggested_tasks.iter().map(|t| t.task.title.as_str()).collect();
    assert_eq!(titles, vec!["Fix login outage", "Write release notes", "Design schema"]);

    let json = serde_json::to_value(&real).unwrap();
    assert_eq!(json["used_sample_data"], json!(false));
    assert_eq!(json["suggested_tasks"].as_array().map(Vec::len), Some(3));
}
