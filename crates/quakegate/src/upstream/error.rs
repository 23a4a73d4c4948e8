//! Upstream error types.

use thiserror::Error;

use quakegate_core::quake::QuakeError;

/// Errors that can occur while talking to the FDSN service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },
}

impl From<UpstreamError> for QuakeError {
    fn from(err: UpstreamError) -> Self {
        QuakeError::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_maps_to_upstream() {
        let err = UpstreamError::ServerError {
            status: 400,
            message: "Bad request".to_string(),
        };

        assert_eq!(
            QuakeError::from(err),
            QuakeError::Upstream("Server returned 400: Bad request".to_string())
        );
    }
}
