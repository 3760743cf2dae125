//! Core record types for both providers and the merged schema.
//!
//! Three shapes live here:
//! - `CatalogMovie`: the native catalog record (camelCase JSON)
//! - `MetadataMovie`: the public movie-database record (OMDb-style PascalCase JSON)
//! - `Movie`: the merged record served to callers
//!
//! The serde attributes define the wire names, and the declaration order of
//! `Movie` fields is the order in which flattened paths are produced.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Native identifier assigned by the catalog provider
pub type CatalogId = u64;

/// Cross-provider identifier (an IMDb id such as `tt0401792`)
pub type CanonicalId = String;

// =============================================================================
// Catalog Records
// =============================================================================

/// A movie as delivered by the catalog provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMovie {
    pub id: CatalogId,
    pub imdb_id: CanonicalId,
    /// Catalog title. Never used by the merge; the metadata title wins.
    #[serde(default)]
    pub title: Option<String>,
    /// Catalog synopsis. Never used by the merge; the metadata plot wins.
    #[serde(default)]
    pub description: Option<String>,
    /// Running time in minutes
    pub duration: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    pub original_language: String,
    pub production_year: u16,
    #[serde(default)]
    pub studios: Vec<String>,
    #[serde(rename = "userrating", default)]
    pub user_rating: UserRating,
}

/// Five-bucket histogram of catalog user ratings.
///
/// `count_star1` holds the number of one-star votes, and so on up to five.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRating {
    pub count_star1: u64,
    pub count_star2: u64,
    pub count_star3: u64,
    pub count_star4: u64,
    pub count_star5: u64,
}

impl UserRating {
    /// Build a histogram from the counts for star levels 1 through 5
    pub fn from_counts(counts: [u64; 5]) -> Self {
        Self {
            count_star1: counts[0],
            count_star2: counts[1],
            count_star3: counts[2],
            count_star4: counts[3],
            count_star5: counts[4],
        }
    }

    /// Counts indexed by star level minus one
    pub fn counts(&self) -> [u64; 5] {
        [
            self.count_star1,
            self.count_star2,
            self.count_star3,
            self.count_star4,
            self.count_star5,
        ]
    }

    /// Total number of votes across all buckets, widened so it cannot overflow
    pub fn total(&self) -> u128 {
        self.counts().iter().map(|&count| u128::from(count)).sum()
    }
}

// =============================================================================
// Metadata Records
// =============================================================================

/// A `{Source, Value}` rating pair, e.g. `{"Source": "Rotten Tomatoes", "Value": "84%"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl RatingEntry {
    pub fn new(source: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            value: value.into(),
        }
    }
}

/// A movie as delivered by the public movie-database provider.
///
/// Every field is textual because the provider reports missing values as
/// `"N/A"` rather than omitting them. The few fields that the provider does
/// omit for some titles default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataMovie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Rated")]
    pub rated: String,
    #[serde(rename = "Released")]
    pub released: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    /// Comma-plus-space joined list of names
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Writer")]
    pub writer: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Awards")]
    pub awards: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<RatingEntry>,
    #[serde(rename = "Metascore")]
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: CanonicalId,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "DVD", default)]
    pub dvd: String,
    #[serde(rename = "BoxOffice", default)]
    pub box_office: String,
    #[serde(rename = "Production", default)]
    pub production: String,
    #[serde(rename = "Website", default)]
    pub website: String,
    #[serde(rename = "Response")]
    pub response: String,
}

// =============================================================================
// Merged Record
// =============================================================================

/// The merged movie served to callers.
///
/// The first block mirrors the catalog's primary fields, the second block
/// mirrors the metadata record. `title`/`Title` and `description`/`Plot`
/// carry the same text on purpose: clients of either provider find the
/// key they already know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub description: String,
    pub duration: u32,
    pub id: CatalogId,
    #[serde(rename = "imdbId")]
    pub imdb_id: CanonicalId,
    pub languages: Vec<String>,
    #[serde(rename = "originalLanguage")]
    pub original_language: String,
    #[serde(rename = "productionYear")]
    pub production_year: u16,
    pub studios: Vec<String>,
    pub title: String,

    #[serde(rename = "Title")]
    pub metadata_title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Rated")]
    pub rated: String,
    #[serde(rename = "Released")]
    pub released: String,
    /// Always `"<duration> min"`, derived from the catalog duration
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Director")]
    pub director: Vec<String>,
    #[serde(rename = "Writer")]
    pub writer: Vec<String>,
    #[serde(rename = "Actors")]
    pub actors: Vec<String>,
    #[serde(rename = "Plot")]
    pub plot: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Awards")]
    pub awards: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    /// Metadata ratings followed by the synthesized catalog rating
    #[serde(rename = "Ratings")]
    pub ratings: Vec<RatingEntry>,
    #[serde(rename = "Metascore")]
    pub metascore: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub metadata_imdb_id: CanonicalId,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "DVD")]
    pub dvd: String,
    #[serde(rename = "BoxOffice")]
    pub box_office: String,
    #[serde(rename = "Production")]
    pub production: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "Response")]
    pub response: String,
}
