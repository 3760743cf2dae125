//! Parser for provider fixture files.
//!
//! Both providers are snapshotted as JSON arrays:
//! - catalog.json: `[CatalogMovie, ...]` in catalog order
//! - metadata.json: `[MetadataMovie, ...]` in any order

use crate::error::{RecordError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file, mapping a missing file to `FileNotFound`
fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RecordError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => RecordError::IoError(e),
    })
}

/// Parse a JSON array of records, tagging errors with the file name
fn parse_records<T: DeserializeOwned>(content: &str, file: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|source| RecordError::ParseError {
        file: file.to_string(),
        source,
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the catalog file, keeping file order
pub fn parse_catalog(path: &Path) -> Result<Vec<CatalogMovie>> {
    let content = read_file(path)?;
    parse_catalog_str(&content, &file_label(path))
}

/// Parse catalog records from an in-memory JSON document
pub fn parse_catalog_str(content: &str, file: &str) -> Result<Vec<CatalogMovie>> {
    let movies: Vec<CatalogMovie> = parse_records(content, file)?;

    for movie in &movies {
        if movie.imdb_id.trim().is_empty() {
            return Err(RecordError::MissingCanonicalId {
                entity: "CatalogMovie".to_string(),
                id: movie.id.to_string(),
            });
        }
    }
    Ok(movies)
}

/// Parse the metadata file
pub fn parse_metadata(path: &Path) -> Result<Vec<MetadataMovie>> {
    let content = read_file(path)?;
    parse_metadata_str(&content, &file_label(path))
}

/// Parse metadata records from an in-memory JSON document
pub fn parse_metadata_str(content: &str, file: &str) -> Result<Vec<MetadataMovie>> {
    let movies: Vec<MetadataMovie> = parse_records(content, file)?;

    for movie in &movies {
        if movie.imdb_id.trim().is_empty() {
            return Err(RecordError::MissingCanonicalId {
                entity: "MetadataMovie".to_string(),
                id: movie.title.clone(),
            });
        }
    }
    Ok(movies)
}
