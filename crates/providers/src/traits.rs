//! Provider interfaces consumed by the search engine.
//!
//! The engine only ever sees these traits, so the local index-backed
//! providers, a cached wrapper, or an HTTP client can be swapped in freely.

use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use records::{CatalogMovie, MetadataMovie};

/// The proprietary content catalog.
///
/// ## Design Note
/// - `Send + Sync` so one provider can serve concurrent requests behind an `Arc`
/// - `movies` returns a fresh stream on every call; nothing is cached here
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Returns the name of this provider (for logging/debugging)
    fn name(&self) -> &str;

    /// Resolve a catalog record by native id or canonical id.
    ///
    /// # Returns
    /// * `Ok(Some(movie))` - The record exists
    /// * `Ok(None)` - No such record
    /// * `Err` - The provider failed
    async fn get_movie_by_id(&self, id: &str) -> Result<Option<CatalogMovie>>;

    /// Lazily yield every catalog record in catalog order.
    ///
    /// The stream is finite; calling again restarts from the beginning.
    fn movies(&self) -> BoxStream<'_, Result<CatalogMovie>>;
}

/// The public movie database, keyed by canonical id.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Resolve a metadata record by canonical id (`Ok(None)` when unknown)
    async fn get_movie_by_id(&self, canonical_id: &str) -> Result<Option<MetadataMovie>>;
}
