//! Error types for gridclip core

use thiserror::Error;

/// Core error type for selection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid cell coordinate: {0:?}")]
    InvalidCoordinate(String),
}

/// Result type alias for core operations
pub type GridResult<T> = std::result::Result<T, GridError>;
