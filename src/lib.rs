pub mod analyzer;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod scoring;

pub use analyzer::{parse_batch, sample_tasks, AnalysisReport, Analyzer, ScoredTask, SuggestionReport};
pub use error::{Error, Result};
pub use scoring::{score_task, ComponentScores, Strategy};
