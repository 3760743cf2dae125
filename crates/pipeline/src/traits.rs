//! Core trait for filtering merged movies.

use anyhow::Result;
use records::Movie;

/// Core trait for filtering movies.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent requests
/// - Filters take ownership of the Vec<Movie> and return the kept movies
///   in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` - The movies that passed, order preserved
    /// * `Err` - If a movie could not be inspected
    fn apply(&self, movies: Vec<Movie>) -> Result<Vec<Movie>>;
}
