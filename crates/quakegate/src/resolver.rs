//! Event resolver: fetch, parse, extract, optionally through the response cache.

use std::sync::Arc;
use std::time::Instant;

use quakegate_core::cache::ResponseCache;
use quakegate_core::quake::{events_from_xml, EventQuery, EventSource, QuakeEvent, Result};

/// Resolves event queries against an upstream [`EventSource`].
///
/// When a [`ResponseCache`] is configured and the query carries both time
/// bounds, the whole fetch/parse/extract pipeline runs through the cache.
/// Other queries always hit the upstream service.
pub struct EventResolver {
    source: Arc<dyn EventSource>,
    cache: Option<ResponseCache>,
}

impl EventResolver {
    /// Creates a resolver that never caches.
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    /// Routes cacheable queries through `cache`.
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Resolves `query` into event records.
    ///
    /// Upstream and XML errors propagate; missing fields never do.
    pub async fn events(&self, query: &EventQuery) -> Result<Vec<QuakeEvent>> {
        match (&self.cache, query.cache_key()) {
            (Some(cache), Some(key)) => cache.fetch(&key, || self.fetch_events(query)).await,
            _ => self.fetch_events(query).await,
        }
    }

    async fn fetch_events(&self, query: &EventQuery) -> Result<Vec<QuakeEvent>> {
        let started = Instant::now();
        let params = query.to_query_pairs();

        let events = match self.source.fetch_xml(&params).await? {
            Some(body) => events_from_xml(&body)?,
            None => Vec::new(),
        };

        tracing::debug!(
            count = events.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched events from upstream"
        );
        Ok(events)
    }
}
