//! Shared application state passed to all request handlers.

use std::sync::Arc;

use quakegate_core::cache::Cache;

use crate::graphql::QuakeSchema;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema.
    pub schema: QuakeSchema,
    /// Cache backend probed by `/readyz`, `None` when caching is disabled.
    pub cache: Option<Arc<dyn Cache>>,
}

impl AppState {
    /// Creates state without a cache backend.
    pub fn new(schema: QuakeSchema) -> Self {
        Self {
            schema,
            cache: None,
        }
    }

    /// Sets the cache backend checked by the readiness probe.
    pub fn with_cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }
}
