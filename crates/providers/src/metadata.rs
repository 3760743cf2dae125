//! Metadata provider backed by a loaded `MetadataIndex`.

use crate::error::Result;
use crate::traits::MetadataProvider;
use async_trait::async_trait;
use records::{MetadataIndex, MetadataMovie};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct IndexedMetadata {
    index: Arc<MetadataIndex>,
}

impl IndexedMetadata {
    pub fn new(index: Arc<MetadataIndex>) -> Self {
        Self { index }
    }
}

#[async_trait]
impl MetadataProvider for IndexedMetadata {
    fn name(&self) -> &str {
        "IndexedMetadata"
    }

    async fn get_movie_by_id(&self, canonical_id: &str) -> Result<Option<MetadataMovie>> {
        let movie = self.index.get(canonical_id).cloned();
        debug!(canonical_id, found = movie.is_some(), "Metadata lookup");
        Ok(movie)
    }
}
