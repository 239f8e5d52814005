//! File logging for taskrank.
//!
//! Lines go to `~/.taskrank/taskrank.log`, truncated at the start of every run.
//!
//! - ERROR: a command failed (bad input file, unreadable config)
//! - WARN: recoverable oddities (unknown strategy names, ignored input)
//! - INFO: one line per command (batch size, strategy, result summary)
//! - DEBUG: per-task component scores, graph statistics, config values
//! - TRACE: cycle detector back edges
//!
//! The threshold is INFO. `--debug` or `TASKRANK_DEBUG=1` lowers it to DEBUG,
//! `TASKRANK_DEBUG=trace` lowers it to TRACE. Until [`init`] has run nothing
//! is written, so library callers and tests stay silent.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

pub const DEBUG_ENV: &str = "TASKRANK_DEBUG";

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static THRESHOLD: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Most verbose level to write, given the `--debug` flag and the value of
/// `TASKRANK_DEBUG` (if set). The variable never lowers verbosity below what
/// the flag asks for.
pub fn threshold(debug_flag: bool, env_value: Option<&str>) -> LogLevel {
    let from_env = match env_value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("trace") => LogLevel::Trace,
        Some("1" | "true" | "debug") => LogLevel::Debug,
        _ => LogLevel::Info,
    };
    let from_flag = if debug_flag {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    from_env.max(from_flag)
}

/// Start logging to `~/.taskrank/taskrank.log`.
pub fn init(debug_flag: bool) {
    let env_value = std::env::var(DEBUG_ENV).ok();
    let level = threshold(debug_flag, env_value.as_deref());
    THRESHOLD.store(level as u8, Ordering::SeqCst);

    let Some(dir) = dirs::home_dir().map(|h| h.join(".taskrank")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let path = dir.join("taskrank.log");
    let _ = std::fs::write(&path, "");
    LOG_PATH.set(path).ok();
}

/// Whether a message at `level` would reach the log file.
pub fn enabled(level: LogLevel) -> bool {
    LOG_PATH.get().is_some() && level <= LogLevel::from_u8(THRESHOLD.load(Ordering::Relaxed))
}

/// Append one timestamped line. Callers normally go through the macros,
/// which skip formatting when the level is filtered out.
pub fn write(level: LogLevel, msg: &str) {
    let Some(path) = LOG_PATH.get() else {
        return;
    };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] [{}] {}", timestamp, level.as_str(), msg);
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __zlog_at {
    ($level:expr, $($arg:tt)*) => {{
        let level = $level;
        if $crate::log::enabled(level) {
            $crate::log::write(level, &format!($($arg)*));
        }
    }};
}

/// Log at INFO.
#[macro_export]
macro_rules! zlog {
    ($($arg:tt)*) => {
        $crate::__zlog_at!($crate::log::LogLevel::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! zlog_error {
    ($($arg:tt)*) => {
        $crate::__zlog_at!($crate::log::LogLevel::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! zlog_warn {
    ($($arg:tt)*) => {
        $crate::__zlog_at!($crate::log::LogLevel::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! zlog_debug {
    ($($arg:tt)*) => {
        $crate::__zlog_at!($crate::log::LogLevel::Debug, $($arg)*)
    };
}

/// Log at TRACE. Only written with `TASKRANK_DEBUG=trace`.
#[macro_export]
macro_rules! zlog_trace {
    ($($arg:tt)*) => {
        $crate::__zlog_at!($crate::log::LogLevel::Trace, $($arg)*)
    };
}
