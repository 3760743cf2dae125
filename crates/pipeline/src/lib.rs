//! Merge and field-search logic for movie records.
//!
//! This crate provides:
//! - `merge_movie` for combining a catalog record and a metadata record
//! - Rating synthesis from the catalog's star histogram
//! - A generic flattener producing dotted/indexed leaf paths
//! - `SearchFilter` and the `FieldMatchFilter` built on it
//!
//! ## Architecture
//! Everything here is synchronous and pure. The search engine fetches
//! records from the providers, then:
//! 1. `merge_movie` builds each `Movie`
//! 2. `FieldMatchFilter` flattens every movie and checks the filter terms
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{merge_movie, FieldMatchFilter, Filter, SearchFilter};
//!
//! let movies: Vec<Movie> = pairs.iter().map(|(c, m)| merge_movie(c, m)).collect();
//!
//! let filter = FieldMatchFilter::new(
//!     SearchFilter::new().with_term("director", "frank miller"),
//! );
//! let matched = filter.apply(movies)?;
//! ```

pub mod traits;
pub mod filters;
pub mod flatten;
pub mod merge;
pub mod rating;
pub mod search_filter;

// Re-export main types
pub use traits::Filter;
pub use filters::FieldMatchFilter;
pub use flatten::{flatten, flatten_value, FlatRecord};
pub use merge::merge_movie;
pub use rating::{synthesize_rating, CATALOG_RATING_SOURCE};
pub use search_filter::SearchFilter;
