//! Human-readable rationale for a task's score.

use crate::scoring::components::ComponentScores;
use crate::scoring::strategy::Strategy;

const VERY_URGENT: &str =
    "This task is overdue or due very soon, so urgency heavily boosts its priority.";
const APPROACHING: &str = "The due date is approaching, which increases its urgency score.";
const QUICK_WIN: &str = "It is a very quick task, making it a good 'quick win'.";
const MODERATE_EFFORT: &str = "It requires moderate effort compared to other tasks.";
const UNBLOCKS: &str = "Completing this task will unblock multiple other tasks.";
const CIRCULAR: &str =
    "⚠ This task is part of a circular dependency chain; dependency impact may be unreliable.";

/// Build the explanation for one scored task.
///
/// Sentences, in order: the strategy's leading factors, an urgency remark,
/// an effort remark, a dependency remark and a cycle warning. Remarks that do
/// not apply are left out; the rest are joined with single spaces.
pub fn explain(components: &ComponentScores, strategy: Strategy, is_circular: bool) -> String {
    let ComponentScores {
        urgency,
        effort,
        dependency,
        ..
    } = *components;

    let mut parts = vec![lead_sentence(components, strategy)];

    if urgency > 10.0 {
        parts.push(VERY_URGENT.to_string());
    } else if urgency > 5.0 {
        parts.push(APPROACHING.to_string());
    }

    if effort >= 9.0 {
        parts.push(QUICK_WIN.to_string());
    } else if effort <= 3.0 {
        parts.push(MODERATE_EFFORT.to_string());
    }

    if dependency >= 4.0 {
        parts.push(UNBLOCKS.to_string());
    }

    if is_circular {
        parts.push(CIRCULAR.to_string());
    }

    parts.join(" ")
}

fn lead_sentence(c: &ComponentScores, strategy: Strategy) -> String {
    let label = strategy.label();
    match strategy {
        Strategy::FastestWins => format!(
            "Prioritized as a '{}' task because it has relatively low effort \
             (effort score {:.1}) and importance {:.1}.",
            label, c.effort, c.importance
        ),
        Strategy::HighImpact => format!(
            "Prioritized as a '{}' task because its importance score is {:.1}, \
             with urgency {:.1}.",
            label, c.importance, c.urgency
        ),
        Strategy::DeadlineDriven => format!(
            "Prioritized as a '{}' task due to its urgency score of {:.1}, \
             and importance {:.1}.",
            label, c.urgency, c.importance
        ),
        Strategy::SmartBalance => format!(
            "Prioritized using '{}' by combining importance ({:.1}), urgency ({:.1}), \
             effort ({:.1}), and dependency impact ({:.1}).",
            label, c.importance, c.urgency, c.effort, c.dependency
        ),
    }
}
