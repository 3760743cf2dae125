//! In-memory indices over provider records.
//!
//! - `CatalogIndex` keeps catalog order and resolves either the native id or
//!   the canonical id to a record
//! - `MetadataIndex` resolves a canonical id to a metadata record
//!
//! Both are built once from fixture files and then shared read-only.

use crate::error::{RecordError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

// =============================================================================
// CatalogIndex
// =============================================================================

/// Catalog records in load order with two lookup tables.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    /// Records in catalog order
    movies: Vec<CatalogMovie>,
    /// Native id -> position in `movies`
    by_id: HashMap<CatalogId, usize>,
    /// Canonical id -> position in `movies`
    by_canonical_id: HashMap<CanonicalId, usize>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from records, rejecting duplicate ids
    pub fn from_movies(movies: Vec<CatalogMovie>) -> Result<Self> {
        let mut index = Self::new();
        for movie in movies {
            index.insert(movie)?;
        }
        Ok(index)
    }

    /// Load and index a catalog file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::from_movies(parser::parse_catalog(path)?)
    }

    /// Append a record at the end of the catalog order
    pub fn insert(&mut self, movie: CatalogMovie) -> Result<()> {
        if self.by_id.contains_key(&movie.id) {
            return Err(RecordError::DuplicateId {
                entity: "CatalogMovie".to_string(),
                id: movie.id.to_string(),
            });
        }
        if self.by_canonical_id.contains_key(&movie.imdb_id) {
            return Err(RecordError::DuplicateId {
                entity: "CatalogMovie".to_string(),
                id: movie.imdb_id.clone(),
            });
        }

        let position = self.movies.len();
        self.by_id.insert(movie.id, position);
        self.by_canonical_id.insert(movie.imdb_id.clone(), position);
        self.movies.push(movie);
        Ok(())
    }

    /// Resolve a native id (`"3532674"`) or a canonical id (`"tt0401792"`)
    pub fn get(&self, id: &str) -> Option<&CatalogMovie> {
        let id = id.trim();
        let position = match id.parse::<CatalogId>() {
            Ok(native) => self.by_id.get(&native),
            Err(_) => self.by_canonical_id.get(id),
        }?;
        self.movies.get(*position)
    }

    /// All records in catalog order
    pub fn movies(&self) -> &[CatalogMovie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// =============================================================================
// MetadataIndex
// =============================================================================

/// Metadata records keyed by canonical id.
#[derive(Debug, Default)]
pub struct MetadataIndex {
    movies: HashMap<CanonicalId, MetadataMovie>,
}

impl MetadataIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_movies(movies: Vec<MetadataMovie>) -> Result<Self> {
        let mut index = Self::new();
        for movie in movies {
            index.insert(movie)?;
        }
        Ok(index)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::from_movies(parser::parse_metadata(path)?)
    }

    pub fn insert(&mut self, movie: MetadataMovie) -> Result<()> {
        if self.movies.contains_key(&movie.imdb_id) {
            return Err(RecordError::DuplicateId {
                entity: "MetadataMovie".to_string(),
                id: movie.imdb_id.clone(),
            });
        }
        self.movies.insert(movie.imdb_id.clone(), movie);
        Ok(())
    }

    pub fn get(&self, canonical_id: &str) -> Option<&MetadataMovie> {
        self.movies.get(canonical_id.trim())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load `catalog.json` and `metadata.json` from a directory.
///
/// The two files are parsed in parallel with `rayon::join`.
pub fn load_from_dir(data_dir: &Path) -> Result<(CatalogIndex, MetadataIndex)> {
    info!("Loading provider snapshots from {:?}", data_dir);

    let catalog_path = data_dir.join("catalog.json");
    let metadata_path = data_dir.join("metadata.json");

    let (catalog, metadata) = rayon::join(
        || CatalogIndex::load_from_file(&catalog_path),
        || MetadataIndex::load_from_file(&metadata_path),
    );
    let catalog = catalog?;
    let metadata = metadata?;

    info!(
        "Loaded {} catalog records and {} metadata records",
        catalog.len(),
        metadata.len()
    );
    Ok((catalog, metadata))
}
