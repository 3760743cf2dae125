//! Catalog provider backed by a loaded `CatalogIndex`.

use crate::error::Result;
use crate::traits::CatalogProvider;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use records::{CatalogIndex, CatalogMovie};
use std::sync::Arc;
use tracing::debug;

/// Serves catalog records from an in-memory snapshot
#[derive(Debug, Clone)]
pub struct IndexedCatalog {
    /// Shared reference to the catalog (read-only, so no lock needed)
    index: Arc<CatalogIndex>,
}

impl IndexedCatalog {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self { index }
    }
}

#[async_trait]
impl CatalogProvider for IndexedCatalog {
    fn name(&self) -> &str {
        "IndexedCatalog"
    }

    async fn get_movie_by_id(&self, id: &str) -> Result<Option<CatalogMovie>> {
        let movie = self.index.get(id).cloned();
        debug!(id, found = movie.is_some(), "Catalog lookup");
        Ok(movie)
    }

    fn movies(&self) -> BoxStream<'_, Result<CatalogMovie>> {
        stream::iter(self.index.movies().iter().cloned().map(Ok)).boxed()
    }
}
