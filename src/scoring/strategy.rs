//! Weighting strategies that fold component scores into one ranking number.

use crate::scoring::components::ComponentScores;
use crate::zlog_warn;
use serde::{Deserialize, Serialize};

/// A named weighting policy.
///
/// Names are matched case-sensitively. Anything unrecognised resolves to
/// [`Strategy::SmartBalance`] through [`Strategy::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Low-effort work first.
    FastestWins,
    /// Important work first.
    HighImpact,
    /// Work closest to (or past) its deadline first.
    DeadlineDriven,
    /// Blend of all four components, including dependency impact.
    #[default]
    SmartBalance,
}

/// Per-component multipliers of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub importance: f64,
    pub urgency: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
        Strategy::SmartBalance,
    ];

    /// The wire name, e.g. `fastest_wins`.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
            Strategy::SmartBalance => "smart_balance",
        }
    }

    /// Human-readable label used in explanations.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::FastestWins => "Fastest Wins",
            Strategy::HighImpact => "High Impact",
            Strategy::DeadlineDriven => "Deadline Driven",
            Strategy::SmartBalance => "Smart Balance",
        }
    }

    /// Exact lookup by wire name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Lookup by wire name, falling back to `smart_balance`.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            zlog_warn!("Unknown strategy {:?}, using smart_balance", name);
            Strategy::SmartBalance
        })
    }

    pub fn weights(&self) -> Weights {
        match self {
            Strategy::FastestWins => Weights {
                importance: 0.5,
                urgency: 0.5,
                effort: 2.0,
                dependency: 0.0,
            },
            Strategy::HighImpact => Weights {
                importance: 2.0,
                urgency: 1.0,
                effort: 0.3,
                dependency: 0.0,
            },
            Strategy::DeadlineDriven => Weights {
                importance: 1.0,
                urgency: 2.0,
                effort: 0.5,
                dependency: 0.0,
            },
            Strategy::SmartBalance => Weights {
                importance: 1.2,
                urgency: 1.2,
                effort: 0.8,
                dependency: 1.5,
            },
        }
    }

    /// Weighted sum of the components, rounded to two decimals.
    ///
    /// Terms are summed leading component first. No upper clamp.
    pub fn apply(&self, components: &ComponentScores) -> f64 {
        let w = self.weights();
        let c = components;
        let score = match self {
            Strategy::FastestWins => {
                c.effort * w.effort + c.importance * w.importance + c.urgency * w.urgency
            }
            Strategy::HighImpact => {
                c.importance * w.importance + c.urgency * w.urgency + c.effort * w.effort
            }
            Strategy::DeadlineDriven => {
                c.urgency * w.urgency + c.importance * w.importance + c.effort * w.effort
            }
            Strategy::SmartBalance => {
                c.importance * w.importance
                    + c.urgency * w.urgency
                    + c.effort * w.effort
                    + c.dependency * w.dependency
            }
        };
        round2(score)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Precision formatting rounds the exact binary value, ties to even.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
