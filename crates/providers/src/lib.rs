//! # Providers Crate
//!
//! The two upstream movie sources the search engine joins:
//!
//! ### Catalog Provider
//! The proprietary content catalog. Records are keyed by a native id and
//! carry the canonical id used for the join. The full catalog is exposed as
//! a lazy, restartable stream.
//!
//! ### Metadata Provider
//! The public movie database, keyed by canonical id. Lookups are the
//! expensive part of a search, so `CachedMetadataProvider` can sit in front
//! of any implementation.
//!
//! ## Example Usage
//!
//! ```ignore
//! use providers::{CachedMetadataProvider, IndexedCatalog, IndexedMetadata};
//! use records::load_from_dir;
//! use std::sync::Arc;
//!
//! let (catalog, metadata) = load_from_dir("data".as_ref())?;
//! let catalog = IndexedCatalog::new(Arc::new(catalog));
//! let metadata = CachedMetadataProvider::new(IndexedMetadata::new(Arc::new(metadata)));
//! ```

pub mod error;
pub mod traits;
pub mod catalog;
pub mod metadata;
pub mod cache;

pub use error::{ProviderError, Result};
pub use traits::{CatalogProvider, MetadataProvider};
pub use catalog::IndexedCatalog;
pub use metadata::IndexedMetadata;
pub use cache::CachedMetadataProvider;
