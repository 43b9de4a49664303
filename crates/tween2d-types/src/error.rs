//! Error types for tween2d.

use std::io;

/// Errors produced by tween2d.
#[derive(Debug, thiserror::Error)]
pub enum Tween2dError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid animation: {0}")]
    InvalidSpec(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Tween2dError>;
