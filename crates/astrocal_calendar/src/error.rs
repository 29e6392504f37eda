use std::path::PathBuf;

use astrocal_search::SearchError;
use thiserror::Error;

/// Errors from loading a calendar configuration or computing a year.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}
