use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("invalid playlist target: {0}")]
    InvalidTarget(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error (code={code}, message={message})")]
    Api { code: i64, message: String },
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("failed to read file: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("playlist export failed: {0}")]
    Core(#[from] PlaylistError),
    #[error("{0}")]
    Context(String),
}

impl ExportError {
    pub fn context<T: Into<String>>(self, message: T) -> Self {
        let message = message.into();
        match self {
            ExportError::Core(err) => ExportError::Context(format!("{message}: {err}")),
            ExportError::Context(existing) => {
                ExportError::Context(format!("{message}: {existing}"))
            }
        }
    }
}
