//! Server crate for the movie search engine.
//!
//! This crate contains the engine that joins the catalog and metadata
//! providers and answers lookups and field searches over merged movies.

pub mod search;

pub use search::{MovieSearchEngine, SearchConfig, SearchResult};
