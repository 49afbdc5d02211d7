use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

/// Export errors with user-friendly messages
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Row export request failed: {0}")]
    RemoteFailed(String),

    #[error("Row export endpoint returned {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("Export text is not ready")]
    NotReady,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
