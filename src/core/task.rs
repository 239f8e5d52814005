//! Task records for a single ranking request.
//!
//! Callers hand over loosely typed [`RawTask`] values (usually straight from
//! JSON). Every field is optional and may carry the wrong type; normalization
//! turns them into [`Task`] records with safe defaults instead of rejecting
//! them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_IMPORTANCE: i64 = 5;
pub const MIN_IMPORTANCE: i64 = 1;
pub const MAX_IMPORTANCE: i64 = 10;
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;
pub const MIN_ESTIMATED_HOURS: f64 = 0.25;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifier of a task within one request.
///
/// Either a JSON integer or a JSON string. The two forms never compare
/// equal, so `1` and `"1"` are different tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl TaskId {
    /// Read an identifier out of an arbitrary JSON value.
    ///
    /// Integral floats (`3.0`) are accepted as numbers; everything else that
    /// is not an integer or a string yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(TaskId::Number).or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| TaskId::Number(f as i64))
            }),
            Value::String(s) => Some(TaskId::Text(s.clone())),
            _ => None,
        }
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        TaskId::Number(value)
    }
}

impl From<i32> for TaskId {
    fn from(value: i32) -> Self {
        TaskId::Number(i64::from(value))
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        TaskId::Text(value.to_string())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parse a `YYYY-MM-DD` date. Anything unparseable is treated as absent.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DUE_DATE_FORMAT).ok()
}

/// Knobs for [`RawTask::normalize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Keep tasks without an id id-less instead of numbering them by position.
    pub strict_ids: bool,
}

/// A task record as submitted by the caller, before normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub due_date: Option<Value>,
    #[serde(default)]
    pub estimated_hours: Option<Value>,
    #[serde(default)]
    pub importance: Option<Value>,
    #[serde(default)]
    pub dependencies: Option<Value>,
}

impl RawTask {
    /// Normalize into a [`Task`].
    ///
    /// `position` is the zero-based index of the record in its batch and
    /// drives the default id and title.
    pub fn normalize(self, position: usize, options: NormalizeOptions) -> Task {
        let ordinal = position as i64 + 1;

        let id = match self.id.as_ref() {
            Some(value) => TaskId::from_value(value),
            None if options.strict_ids => None,
            None => Some(TaskId::Number(ordinal)),
        };

        let title = match self.title {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => format!("Task {}", ordinal),
            Some(other) => other.to_string(),
        };

        let due_date = match self.due_date.as_ref() {
            Some(Value::String(s)) => parse_due_date(s),
            _ => None,
        };

        let dependencies = match self.dependencies.as_ref() {
            Some(Value::Array(items)) => items.iter().filter_map(TaskId::from_value).collect(),
            _ => Vec::new(),
        };

        Task {
            id,
            title,
            due_date,
            estimated_hours: coerce_hours(self.estimated_hours.as_ref()),
            importance: coerce_importance(self.importance.as_ref()),
            dependencies,
        }
    }
}

// Zero and empty values count as missing.
fn coerce_hours(value: Option<&Value>) -> f64 {
    let hours = match value {
        Some(Value::Number(n)) => n.as_f64().filter(|h| *h != 0.0),
        Some(Value::String(s)) if !s.is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    hours
        .filter(|h| h.is_finite())
        .unwrap_or(DEFAULT_ESTIMATED_HOURS)
        .max(MIN_ESTIMATED_HOURS)
}

fn coerce_importance(value: Option<&Value>) -> u8 {
    let importance = match value {
        Some(Value::Number(n)) => n.as_i64().filter(|i| *i != 0).or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f != 0.0)
                .map(|f| f.trunc() as i64)
        }),
        Some(Value::String(s)) if !s.is_empty() => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    clamp_importance(importance.unwrap_or(DEFAULT_IMPORTANCE))
}

fn clamp_importance(value: i64) -> u8 {
    value.clamp(MIN_IMPORTANCE, MAX_IMPORTANCE) as u8
}

/// A normalized task, ready to be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, absent only when ids are not assigned by position.
    pub id: Option<TaskId>,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    /// Always at least 0.25.
    pub estimated_hours: f64,
    /// Always within 1..=10.
    pub importance: u8,
    /// Ids this task waits on, in caller order. Not checked for existence.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl Task {
    /// Create a task with default effort (1h), importance (5), no due date
    /// and no dependencies.
    pub fn new(id: impl Into<TaskId>, title: &str) -> Self {
        Self {
            id: Some(id.into()),
            title: title.to_string(),
            due_date: None,
            estimated_hours: DEFAULT_ESTIMATED_HOURS,
            importance: DEFAULT_IMPORTANCE as u8,
            dependencies: Vec::new(),
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the effort estimate, floored at 0.25h.
    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = if hours.is_finite() {
            hours.max(MIN_ESTIMATED_HOURS)
        } else {
            DEFAULT_ESTIMATED_HOURS
        };
        self
    }

    /// Set the importance, clamped to 1..=10.
    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = clamp_importance(importance);
        self
    }

    pub fn with_dependencies<I, T>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}
