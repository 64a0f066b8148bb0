//! Errors raised while loading feed data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to parse feed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FeedError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
