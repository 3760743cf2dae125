//! Read-through cache in front of any metadata provider.
//!
//! Found records are cached by canonical id, optionally with a TTL.
//! Misses and errors always go back to the inner provider.

use crate::error::Result;
use crate::traits::MetadataProvider;
use async_trait::async_trait;
use records::MetadataMovie;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
struct CachedEntry {
    movie: MetadataMovie,
    stored_at: Instant,
}

/// Wraps a metadata provider with an in-memory cache.
///
/// Cloning shares the cache.
#[derive(Debug, Clone)]
pub struct CachedMetadataProvider<P> {
    inner: P,
    entries: Arc<RwLock<HashMap<String, CachedEntry>>>,
    /// `None` keeps entries for the lifetime of the process
    ttl: Option<Duration>,
}

impl<P: MetadataProvider> CachedMetadataProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl: None,
        }
    }

    /// Expire entries after `ttl` (default: never)
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Number of cached records, including expired ones not yet replaced
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every cached record
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    fn is_fresh(&self, entry: &CachedEntry) -> bool {
        match self.ttl {
            Some(ttl) => entry.stored_at.elapsed() < ttl,
            None => true,
        }
    }
}

#[async_trait]
impl<P: MetadataProvider> MetadataProvider for CachedMetadataProvider<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn get_movie_by_id(&self, canonical_id: &str) -> Result<Option<MetadataMovie>> {
        if let Some(entry) = self.entries.read().await.get(canonical_id) {
            if self.is_fresh(entry) {
                debug!(canonical_id, "Metadata cache hit");
                return Ok(Some(entry.movie.clone()));
            }
        }

        debug!(canonical_id, provider = self.inner.name(), "Metadata cache miss");
        let movie = self.inner.get_movie_by_id(canonical_id).await?;

        if let Some(movie) = &movie {
            self.entries.write().await.insert(
                canonical_id.to_string(),
                CachedEntry {
                    movie: movie.clone(),
                    stored_at: Instant::now(),
                },
            );
        }
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and knows a single canonical id
    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl MetadataProvider for CountingProvider {
        fn name(&self) -> &str {
            "CountingProvider"
        }

        async fn get_movie_by_id(&self, canonical_id: &str) -> Result<Option<MetadataMovie>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ProviderError::unavailable("CountingProvider", "offline"));
            }
            if canonical_id == "tt1" {
                Ok(Some(MetadataMovie {
                    title: "Cached".to_string(),
                    imdb_id: "tt1".to_string(),
                    ..Default::default()
                }))
            } else {
                Ok(None)
            }
        }
    }

    #[tokio::test]
    async fn test_found_records_are_cached() {
        let cache = CachedMetadataProvider::new(CountingProvider::default());

        let first = cache.get_movie_by_id("tt1").await.unwrap();
        let second = cache.get_movie_by_id("tt1").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_misses_are_not_cached() {
        let cache = CachedMetadataProvider::new(CountingProvider::default());

        assert!(cache.get_movie_by_id("tt2").await.unwrap().is_none());
        assert!(cache.get_movie_by_id("tt2").await.unwrap().is_none());

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_entries_are_refetched() {
        let cache =
            CachedMetadataProvider::new(CountingProvider::default()).with_ttl(Duration::ZERO);

        cache.get_movie_by_id("tt1").await.unwrap();
        cache.get_movie_by_id("tt1").await.unwrap();

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let cache = CachedMetadataProvider::new(CountingProvider {
            fail: true,
            ..Default::default()
        });

        let err = cache.get_movie_by_id("tt1").await.unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable { .. }));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = CachedMetadataProvider::new(CountingProvider::default());
        cache.get_movie_by_id("tt1").await.unwrap();
        cache.clear().await;
        cache.get_movie_by_id("tt1").await.unwrap();

        assert_eq!(cache.inner.calls.load(Ordering::SeqCst), 2);
    }
}
