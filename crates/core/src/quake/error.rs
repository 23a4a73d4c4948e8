use thiserror::Error;

use crate::xml::XmlError;

/// Errors that can occur while resolving events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuakeError {
    /// Transport failure or non-success status from the upstream service.
    #[error("Upstream request failed: {0}")]
    Upstream(String),
    /// The upstream payload is not well-formed XML.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

/// Result type for event resolution.
pub type Result<T> = std::result::Result<T, QuakeError>;
