use thiserror::Error;

/// Errors reported by a cache backend.
///
/// Both variants are non-fatal to request handling: the read-through wrapper
/// treats them as a miss on read and logs them on write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The backend could not be reached.
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    /// The backend was reached but rejected the command.
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
