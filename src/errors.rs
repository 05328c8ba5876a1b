use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions surfaced to the user. Each variant has its own message
/// so a missing file never reads like an empty one.
#[derive(Error, Debug)]
pub enum ThumbError {
    #[error("Could not extract video ID from URL: {url}")]
    InvalidUrl { url: String },

    #[error("Batch file not found: {}", path.display())]
    BatchFileNotFound { path: PathBuf },

    #[error("No URLs found in batch file: {}", path.display())]
    NoUrlsInBatch { path: PathBuf },

    #[error("No valid URLs were processed: none of the {total} URLs matched a supported format")]
    NoValidUrls { total: usize },

    #[error("No valid URLs were processed: metadata could not be retrieved for any of the {total} URLs")]
    NoMetadataFetched { total: usize },

    #[error("Could not read batch file {}: {source}", path.display())]
    BatchRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write to output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to download thumbnail for video ID: {video_id}")]
    DownloadFailed { video_id: String },

    #[error("Metadata lookup failed: {message}")]
    Metadata { message: String },

    #[error("Could not serialize metadata: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ThumbError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Extra lines printed after the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidUrl { .. } => Some(
                "Supported formats:\n  \
                 - https://www.youtube.com/watch?v=VIDEO_ID\n  \
                 - https://youtu.be/VIDEO_ID\n  \
                 - https://www.youtube.com/embed/VIDEO_ID",
            ),
            _ => None,
        }
    }
}

pub type ThumbResult<T> = Result<T, ThumbError>;

/// Transport-level failures. These never reach the user directly: the
/// fetchers turn them into a fallback attempt or an empty record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{url}: request failed: {message}")]
    Request { url: String, message: String },

    #[error("{url}: unexpected status {status}")]
    Status { url: String, status: u16 },
}
