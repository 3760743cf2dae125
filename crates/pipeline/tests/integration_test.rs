//! Integration tests for the pipeline.
//!
//! These tests parse provider snapshots, merge them, and run field filters
//! over the merged movies the way the search engine does.

use pipeline::{flatten, merge_movie, FieldMatchFilter, Filter, SearchFilter};
use records::parser::{parse_catalog_str, parse_metadata_str};
use records::Movie;

const CATALOG: &str = r#"[
    {
        "id": 101, "imdbId": "tt0401792", "title": "Sin City (Catalog)",
        "duration": 119, "languages": ["de", "en"], "originalLanguage": "en",
        "productionYear": 2005, "studios": ["Dimension Films"],
        "userrating": {"countStar1": 0, "countStar2": 0, "countStar3": 0, "countStar4": 0, "countStar5": 10}
    },
    {
        "id": 102, "imdbId": "tt0113277",
        "duration": 170, "languages": ["en"], "originalLanguage": "en",
        "productionYear": 1995, "studios": ["Warner Bros."],
        "userrating": {"countStar1": 1, "countStar2": 0, "countStar3": 0, "countStar4": 0, "countStar5": 1}
    }
]"#;

const METADATA: &str = r#"[
    {
        "Title": "Sin City", "Year": "2005", "Rated": "R", "Released": "01 Apr 2005",
        "Runtime": "124 min", "Genre": "Crime, Thriller",
        "Director": "Frank Miller, Quentin Tarantino, Robert Rodriguez",
        "Writer": "Frank Miller", "Actors": "Mickey Rourke, Clive Owen, Bruce Willis",
        "Plot": "A neo-noir crime anthology.", "Language": "English", "Country": "USA",
        "Awards": "N/A", "Poster": "N/A",
        "Ratings": [{"Source": "Internet Movie Database", "Value": "8.0/10"}],
        "Metascore": "74", "imdbRating": "8.0", "imdbVotes": "760,000",
        "imdbID": "tt0401792", "Type": "movie", "Response": "True"
    },
    {
        "Title": "Heat", "Year": "1995", "Rated": "R", "Released": "15 Dec 1995",
        "Runtime": "170 min", "Genre": "Crime, Drama", "Director": "Michael Mann",
        "Writer": "Michael Mann", "Actors": "Al Pacino, Robert De Niro",
        "Plot": "A group of professional bank robbers.", "Language": "English",
        "Country": "USA", "Awards": "N/A", "Poster": "N/A", "Ratings": [],
        "Metascore": "76", "imdbRating": "8.3", "imdbVotes": "690,000",
        "imdbID": "tt0113277", "Type": "movie", "Response": "True"
    }
]"#;

fn merged_movies() -> Vec<Movie> {
    let catalog = parse_catalog_str(CATALOG, "catalog.json").unwrap();
    let metadata = parse_metadata_str(METADATA, "metadata.json").unwrap();

    catalog
        .iter()
        .filter_map(|c| {
            metadata
                .iter()
                .find(|m| m.imdb_id == c.imdb_id)
                .map(|m| merge_movie(c, m))
        })
        .collect()
}

#[test]
fn test_merged_movie_flattens_to_expected_paths() {
    let movies = merged_movies();
    let flat = flatten(&movies[0]).unwrap();

    assert_eq!(flat.get("title"), Some("Sin City"));
    assert_eq!(flat.get("Title"), Some("Sin City"));
    assert_eq!(flat.get("Runtime"), Some("119 min"));
    assert_eq!(flat.get("Director.1"), Some("Quentin Tarantino"));
    assert_eq!(flat.get("languages.0"), Some("de"));
    assert_eq!(flat.get("Ratings.1.Source"), Some("Joyn"));
    assert_eq!(flat.get("Ratings.1.Value"), Some("5.0/5.0"));
    assert_eq!(flat.get("productionYear"), Some("2005"));

    // Catalog primary block comes first, metadata block after it
    let first_path = flat.iter().next().map(|(path, _)| path);
    assert_eq!(first_path, Some("description"));
}

#[test]
fn test_filter_by_director() {
    let filter = FieldMatchFilter::new(SearchFilter::new().with_term("director", "frank miller"));
    let matched = filter.apply(merged_movies()).unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].imdb_id, "tt0401792");
}

#[test]
fn test_filter_by_synthesized_rating() {
    let filter = FieldMatchFilter::new(SearchFilter::new().with_term("Ratings", "3.0/5.0"));
    let matched = filter.apply(merged_movies()).unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].title, "Heat");
}

#[test]
fn test_filter_across_both_providers() {
    // `studios` comes from the catalog, `Genre` from the metadata provider
    let filter = FieldMatchFilter::new(
        SearchFilter::new()
            .with_term("studios", "warner bros.")
            .with_term("genre", "crime, drama"),
    );
    let matched = filter.apply(merged_movies()).unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, 102);
}
