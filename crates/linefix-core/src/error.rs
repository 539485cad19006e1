use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LineFixError>;

#[derive(Debug, Error)]
pub enum LineFixError {
    #[error("read failure: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failure: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rule format error: {0}")]
    RuleFormat(String),

    #[error("validation error: {0}")]
    Validation(String),
}
