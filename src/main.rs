use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use taskrank::config::Config;
use taskrank::core::task::{parse_due_date, NormalizeOptions, Task};
use taskrank::{parse_batch, zlog, zlog_error, zlog_warn, Analyzer, Error, Result, Strategy};

/// Taskrank - rank tasks by urgency, importance, effort and dependency impact
#[derive(Parser, Debug)]
#[command(name = "taskrank")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    TASKRANK_DEBUG=1        Enable debug logging (alternative to --debug)\n    TASKRANK_DEBUG=trace    Also log cycle detector back edges")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.taskrank/taskrank.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Reference date for urgency scoring (defaults to the local date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Score and sort every task in a JSON batch
    Analyze {
        /// JSON file with a task list or {"tasks": [...]} (stdin if omitted or "-")
        input: Option<PathBuf>,

        /// fastest_wins, high_impact, deadline_driven or smart_balance
        #[arg(short, long)]
        strategy: Option<String>,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// Suggest the top tasks to work on today
    Suggest {
        /// JSON file with a task list (sample tasks are used when empty or
        /// when stdin is a terminal)
        input: Option<PathBuf>,

        #[arg(short, long)]
        strategy: Option<String>,

        /// Number of tasks to suggest
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[arg(long)]
        pretty: bool,
    },

    /// List strategies and their weights
    Strategies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    taskrank::log::init(cli.debug);

    let result = run(cli);
    if let Err(e) = &result {
        zlog_error!("{}", e);
    }
    result
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let options = NormalizeOptions {
        strict_ids: config.strict_ids,
    };

    match cli.command {
        Command::Analyze {
            input,
            strategy,
            pretty,
        } => {
            let today = resolve_today(cli.today.as_deref())?;
            let strategy = strategy.unwrap_or_else(|| config.effective_strategy().to_string());
            zlog!("Analyze command: input={:?}, strategy={}, today={}", input, strategy, today);

            let value: Value = serde_json::from_str(&read_input(input.as_deref())?)?;
            let tasks = parse_batch(&value, options)?;
            let report = Analyzer::new(&strategy, today).analyze(tasks);
            zlog!(
                "Ranked {} tasks, {} flagged circular",
                report.tasks.len(),
                report.circular_task_ids.len()
            );
            print_json(&report, pretty)
        }
        Command::Suggest {
            input,
            strategy,
            limit,
            pretty,
        } => {
            let today = resolve_today(cli.today.as_deref())?;
            let strategy = strategy.unwrap_or_else(|| config.effective_strategy().to_string());
            let limit = limit.unwrap_or_else(|| config.effective_suggest_limit());
            zlog!("Suggest command: input={:?}, strategy={}, limit={}", input, strategy, limit);

            let text = suggestion_text(input.as_deref(), io::stdin().is_terminal())?;
            let tasks = suggestion_input(&text, options)?;
            let report = Analyzer::new(&strategy, today).suggest(tasks, limit);
            print_json(&report, pretty)
        }
        Command::Strategies => {
            for strategy in Strategy::ALL {
                let w = strategy.weights();
                println!(
                    "{:<16} importance {:.1}  urgency {:.1}  effort {:.1}  dependency {:.1}",
                    strategy.name(),
                    w.importance,
                    w.urgency,
                    w.effort,
                    w.dependency
                );
            }
            Ok(())
        }
    }
}

fn resolve_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(s) => parse_due_date(s).ok_or_else(|| Error::InvalidDate {
            value: s.to_string(),
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn reads_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if !reads_stdin(path) => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Input for `suggest`. Nobody is piping tasks into an interactive
/// terminal, so that case reads as empty instead of waiting for EOF.
fn suggestion_text(path: Option<&Path>, stdin_is_terminal: bool) -> Result<String> {
    if reads_stdin(path) && stdin_is_terminal {
        zlog!("stdin is a terminal, suggesting from sample data");
        return Ok(String::new());
    }
    read_input(path)
}

/// Blank input or an unrecognised shape means "no tasks" for suggestions.
fn suggestion_input(text: &str, options: NormalizeOptions) -> Result<Vec<Task>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(text)?;
    match parse_batch(&value, options) {
        Ok(tasks) => Ok(tasks),
        Err(Error::InvalidInput(reason)) => {
            zlog_warn!("Ignoring suggestion input: {}", reason);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
