//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use quakegate_core::cache::{Cache, Result as CacheResult};
use quakegate_core::quake::{EventSource, QuakeError, Result};

/// QuakeML document with a single event (M 3.2±0.1, 42.1N 13.4E, depth 10.0±2.0).
pub const ONE_EVENT_XML: &str = include_str!("../tests/fixtures/one_event.xml");

enum Reply {
    Xml(String),
    NoContent,
    Failure(String),
}

/// Event source returning a canned reply and recording each call.
pub struct FixtureSource {
    reply: Reply,
    calls: AtomicUsize,
    last_params: Mutex<Vec<(&'static str, String)>>,
}

impl FixtureSource {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_params: Mutex::new(Vec::new()),
        }
    }

    pub fn xml(body: &str) -> Self {
        Self::with_reply(Reply::Xml(body.to_string()))
    }

    pub fn no_content() -> Self {
        Self::with_reply(Reply::NoContent)
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Failure(message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> Vec<(&'static str, String)> {
        self.last_params.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSource for FixtureSource {
    async fn fetch_xml(&self, params: &[(&'static str, String)]) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_params.lock().unwrap() = params.to_vec();

        match &self.reply {
            Reply::Xml(body) => Ok(Some(body.clone())),
            Reply::NoContent => Ok(None),
            Reply::Failure(message) => Err(QuakeError::Upstream(message.clone())),
        }
    }
}

/// Backend-independent cache store; TTLs are ignored.
#[derive(Default)]
pub struct TestCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl Cache for TestCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Waits until the background cache write for `key` lands.
pub async fn wait_for_key(cache: &dyn Cache, key: &str) {
    for _ in 0..200 {
        if cache.get(key).await.unwrap().is_some() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    panic!("key {key} was never written");
}
