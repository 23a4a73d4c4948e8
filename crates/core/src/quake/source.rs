use async_trait::async_trait;

use super::Result;

/// Outbound query parameters, in the order they are sent.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Provider of raw QuakeML documents.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetches the XML body for the given query parameters.
    ///
    /// Returns `Ok(None)` when the service reports that nothing matched
    /// (FDSN answers such queries with `204 No Content`).
    async fn fetch_xml(&self, params: &[(&'static str, String)]) -> Result<Option<String>>;
}
