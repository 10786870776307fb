use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// A scoped key/value store for raw response bodies with per-entry TTL.
///
/// The client only requires that reads and writes against a given key be
/// individually atomic. Concurrent callers racing on the same key may both
/// fetch live and both write; last write wins, which is acceptable because the
/// same query and variables produce the same payload within the TTL window.
pub trait ResponseCache: Send + Sync {
    /// Returns the cached body for `(scope, key)` if a fresh entry exists.
    fn get(&self, scope: &str, key: &str) -> Option<String>;

    /// Stores `body` under `(scope, key)`, considered fresh for `ttl`.
    fn set(&self, scope: &str, key: &str, body: String, ttl: Duration);
}

struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// A process-local [`ResponseCache`] backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryCache {
    map: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn compose(scope: &str, key: &str) -> String {
        format!("{scope}\n{key}")
    }
}

impl ResponseCache for MemoryCache {
    fn get(&self, scope: &str, key: &str) -> Option<String> {
        let guard = self.map.read().ok()?;
        if let Some(entry) = guard.get(&Self::compose(scope, key))
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    fn set(&self, scope: &str, key: &str, body: String, ttl: Duration) {
        let entry = CacheEntry {
            body,
            expires_at: Instant::now() + ttl,
        };
        if let Ok(mut guard) = self.map.write() {
            guard.insert(Self::compose(scope, key), entry);
        }
    }
}
