//! # Records Crate
//!
//! Record types for the two movie providers and the merged schema, plus
//! the fixture loaders and indices that back the local providers.
//!
//! ## Main Components
//!
//! - **types**: `CatalogMovie`, `MetadataMovie`, `Movie`, `RatingEntry`, `UserRating`
//! - **parser**: Parse JSON snapshot files into records
//! - **index**: `CatalogIndex` and `MetadataIndex` for id lookups
//! - **error**: Error types for loading records
//!
//! ## Example Usage
//!
//! ```ignore
//! use records::load_from_dir;
//! use std::path::Path;
//!
//! let (catalog, metadata) = load_from_dir(Path::new("data"))?;
//! let sin_city = catalog.get("tt0401792").unwrap();
//! let details = metadata.get(&sin_city.imdb_id);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{RecordError, Result};
pub use index::{load_from_dir, CatalogIndex, MetadataIndex};
pub use types::{
    CanonicalId,
    CatalogId,
    CatalogMovie,
    MetadataMovie,
    Movie,
    RatingEntry,
    UserRating,
};
