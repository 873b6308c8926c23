//! Error types for Parley Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
