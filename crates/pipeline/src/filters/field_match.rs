//! Filter that keeps movies matching a `SearchFilter`.
//!
//! Each movie is flattened once, then every term of the filter is checked
//! against the flattened leaves. Movies are checked in parallel with Rayon;
//! the output keeps the input order.

use crate::flatten::flatten;
use crate::search_filter::SearchFilter;
use crate::traits::Filter;
use anyhow::{Context, Result};
use rayon::prelude::*;
use records::Movie;
use tracing::debug;

pub struct FieldMatchFilter {
    filter: SearchFilter,
}

impl FieldMatchFilter {
    pub fn new(filter: SearchFilter) -> Self {
        Self { filter }
    }

    /// Check a single movie
    pub fn matches(&self, movie: &Movie) -> Result<bool> {
        let record = flatten(movie)
            .with_context(|| format!("Failed to flatten movie {}", movie.id))?;
        Ok(self.filter.matches(&record))
    }

    /// Check every movie in parallel; `mask[i]` is the verdict for `movies[i]`
    pub fn match_mask(&self, movies: &[Movie]) -> Result<Vec<bool>> {
        movies
            .par_iter()
            .map(|movie| self.matches(movie))
            .collect()
    }
}

impl Filter for FieldMatchFilter {
    fn name(&self) -> &str {
        "FieldMatchFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        if self.filter.is_empty() {
            return Ok(movies);
        }

        let keep = self.match_mask(&movies)?;

        let filtered: Vec<Movie> = movies
            .into_iter()
            .zip(keep)
            .filter_map(|(movie, keep)| keep.then_some(movie))
            .collect();

        debug!(
            "{} kept {} movies for '{}'",
            self.name(),
            filtered.len(),
            self.filter
        );
        Ok(filtered)
    }
}
