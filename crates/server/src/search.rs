//! # Movie Search Engine
//!
//! This module joins the two providers and serves merged movies:
//! 1. Resolve catalog records (by id, or the whole catalog stream)
//! 2. Resolve each record's metadata by canonical id
//! 3. Merge every complete pair into a `Movie`
//! 4. Apply field filters for searches
//!
//! A record missing on either side is "not found", never an error.
//! Provider failures abort the request and are returned with context.

use std::pin::pin;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::StreamExt;
use serde::Serialize;
use tracing::{debug, info, instrument};

use pipeline::{merge_movie, FieldMatchFilter, SearchFilter};
use providers::{CatalogProvider, MetadataProvider};
use records::Movie;

/// Result of a field search.
///
/// `matches` is `None` when no filter was applied. A filter that matched
/// nothing reports `Some(0)` together with the full collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub movies: Vec<Movie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<usize>,
}

/// Tuning knobs for the search engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Metadata lookups in flight while listing the catalog (minimum 1)
    pub metadata_concurrency: usize,
}

impl SearchConfig {
    /// Configure parallel metadata lookups (default: 1, strictly sequential)
    pub fn with_metadata_concurrency(mut self, concurrency: usize) -> Self {
        self.metadata_concurrency = concurrency.max(1);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            metadata_concurrency: 1,
        }
    }
}

/// Joins catalog and metadata providers into merged, searchable movies
#[derive(Clone)]
pub struct MovieSearchEngine {
    catalog: Arc<dyn CatalogProvider>,
    metadata: Arc<dyn MetadataProvider>,
    config: SearchConfig,
}

impl MovieSearchEngine {
    /// Create an engine over the given providers
    ///
    /// # Arguments
    /// * `catalog` - Source of native catalog records
    /// * `metadata` - Source of metadata records, keyed by canonical id
    pub fn new(catalog: Arc<dyn CatalogProvider>, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self {
            catalog,
            metadata,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Look up one merged movie by catalog id or canonical id
    ///
    /// # Returns
    /// * `Ok(Some(movie))` - Both providers know the movie
    /// * `Ok(None)` - Either provider has no record
    /// * `Err` - A provider failed
    #[instrument(skip(self))]
    pub async fn get_movie_by_id(&self, id: &str) -> Result<Option<Movie>> {
        let Some(catalog_movie) = self
            .catalog
            .get_movie_by_id(id)
            .await
            .with_context(|| format!("Catalog lookup failed for {}", id))?
        else {
            debug!("No catalog record for {}", id);
            return Ok(None);
        };

        let Some(metadata_movie) = self
            .metadata
            .get_movie_by_id(&catalog_movie.imdb_id)
            .await
            .with_context(|| format!("Metadata lookup failed for {}", catalog_movie.imdb_id))?
        else {
            debug!(
                "No metadata record for {} (canonical id {})",
                id, catalog_movie.imdb_id
            );
            return Ok(None);
        };

        Ok(Some(merge_movie(&catalog_movie, &metadata_movie)))
    }

    /// Search merged movies by field filter
    ///
    /// ## Algorithm
    /// 1. Build the full merged collection
    /// 2. Empty filter: return everything, `matches: None`
    /// 3. Otherwise keep the matching movies
    /// 4. Some matched: return them with their count
    /// 5. None matched: return the full collection with `matches: Some(0)`
    #[instrument(skip(self, filter), fields(filter = %filter))]
    pub async fn get_movies_by_search(&self, filter: &SearchFilter) -> Result<SearchResult> {
        let start_time = Instant::now();
        let movies = self.get_movies().await?;

        if filter.is_empty() {
            info!("No filter applied, returning {} movies", movies.len());
            return Ok(SearchResult {
                movies,
                matches: None,
            });
        }

        // Flattening every movie is CPU-bound, keep it off the async workers.
        // The collection moves into the task and comes back with the mask.
        let field_filter = FieldMatchFilter::new(filter.clone());
        let (movies, keep) = tokio::task::spawn_blocking(move || {
            let keep = field_filter.match_mask(&movies)?;
            Ok::<_, anyhow::Error>((movies, keep))
        })
        .await
        .context("Search filter task panicked")?
        .context("Failed to apply search filter")?;

        let count = keep.iter().filter(|&&kept| kept).count();
        info!(
            "Search matched {} of {} movies in {:.2?}",
            count,
            movies.len(),
            start_time.elapsed()
        );

        if count == 0 {
            return Ok(SearchResult {
                movies,
                matches: Some(0),
            });
        }

        let matched: Vec<Movie> = movies
            .into_iter()
            .zip(keep)
            .filter_map(|(movie, kept)| kept.then_some(movie))
            .collect();
        Ok(SearchResult {
            movies: matched,
            matches: Some(count),
        })
    }

    /// Merge every catalog movie that has a metadata record, in catalog order
    ///
    /// The catalog stream is re-read on every call. Metadata lookups run up
    /// to `metadata_concurrency` at a time; results are consumed in catalog
    /// order regardless of which lookup finishes first.
    pub async fn get_movies(&self) -> Result<Vec<Movie>> {
        let start_time = Instant::now();
        let metadata = &self.metadata;

        let resolved = self
            .catalog
            .movies()
            .map(move |item| async move {
                let catalog_movie = item.context("Failed to read catalog")?;
                let metadata_movie = metadata
                    .get_movie_by_id(&catalog_movie.imdb_id)
                    .await
                    .with_context(|| {
                        format!("Metadata lookup failed for {}", catalog_movie.imdb_id)
                    })?;
                Ok::<_, anyhow::Error>((catalog_movie, metadata_movie))
            })
            .buffered(self.config.metadata_concurrency);
        let mut resolved = pin!(resolved);

        let mut movies = Vec::new();
        let mut skipped = 0usize;
        while let Some(pair) = resolved.next().await {
            match pair? {
                (catalog_movie, Some(metadata_movie)) => {
                    movies.push(merge_movie(&catalog_movie, &metadata_movie));
                }
                (catalog_movie, None) => {
                    skipped += 1;
                    debug!(
                        "Skipping catalog movie {}: no metadata for {}",
                        catalog_movie.id, catalog_movie.imdb_id
                    );
                }
            }
        }

        info!(
            "Merged {} movies ({} without metadata) in {:.2?}",
            movies.len(),
            skipped,
            start_time.elapsed()
        );
        Ok(movies)
    }
}
