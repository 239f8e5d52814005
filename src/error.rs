use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
