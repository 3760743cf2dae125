//! Merges a catalog record and a metadata record into one `Movie`.
//!
//! ## Field Mapping
//! - `title` / `Title`: metadata title (the catalog title is dropped)
//! - `description` / `Plot`: metadata plot
//! - `duration`: catalog duration; `Runtime` is rebuilt from it as `"<n> min"`
//! - `Director` / `Writer` / `Actors`: metadata credits split on `", "`
//! - `Ratings`: metadata ratings plus the synthesized catalog rating
//! - everything else passes through from its provider

use crate::rating::synthesize_rating;
use records::{CatalogMovie, MetadataMovie, Movie};

/// Separator the metadata provider uses in credit lists
const CREDITS_SEPARATOR: &str = ", ";

/// Build the merged record. Both inputs are only borrowed.
pub fn merge_movie(catalog: &CatalogMovie, metadata: &MetadataMovie) -> Movie {
    let mut ratings = metadata.ratings.clone();
    ratings.push(synthesize_rating(&catalog.user_rating));

    Movie {
        description: metadata.plot.clone(),
        duration: catalog.duration,
        id: catalog.id,
        imdb_id: catalog.imdb_id.clone(),
        languages: catalog.languages.clone(),
        original_language: catalog.original_language.clone(),
        production_year: catalog.production_year,
        studios: catalog.studios.clone(),
        title: metadata.title.clone(),

        metadata_title: metadata.title.clone(),
        year: metadata.year.clone(),
        rated: metadata.rated.clone(),
        released: metadata.released.clone(),
        runtime: format_runtime(catalog.duration),
        genre: metadata.genre.clone(),
        director: split_credits(&metadata.director),
        writer: split_credits(&metadata.writer),
        actors: split_credits(&metadata.actors),
        plot: metadata.plot.clone(),
        language: metadata.language.clone(),
        country: metadata.country.clone(),
        awards: metadata.awards.clone(),
        poster: metadata.poster.clone(),
        ratings,
        metascore: metadata.metascore.clone(),
        imdb_rating: metadata.imdb_rating.clone(),
        imdb_votes: metadata.imdb_votes.clone(),
        metadata_imdb_id: metadata.imdb_id.clone(),
        kind: metadata.kind.clone(),
        dvd: metadata.dvd.clone(),
        box_office: metadata.box_office.clone(),
        production: metadata.production.clone(),
        website: metadata.website.clone(),
        response: metadata.response.clone(),
    }
}

/// `"124 min"` for a 124 minute movie
pub fn format_runtime(duration: u32) -> String {
    format!("{} min", duration)
}

/// Split a `"A, B, C"` credit list into names.
///
/// An empty list yields no names rather than one empty name.
pub fn split_credits(credits: &str) -> Vec<String> {
    if credits.is_empty() {
        return Vec::new();
    }
    credits
        .split(CREDITS_SEPARATOR)
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use records::{RatingEntry, UserRating};

    fn catalog() -> CatalogMovie {
        CatalogMovie {
            id: 3532674,
            imdb_id: "tt0401792".to_string(),
            title: Some("Sin City - Catalog Cut".to_string()),
            description: Some("Catalog synopsis".to_string()),
            duration: 119,
            languages: vec!["de".to_string(), "en".to_string()],
            original_language: "en".to_string(),
            production_year: 2005,
            studios: vec!["Dimension Films".to_string()],
            user_rating: UserRating::from_counts([1, 0, 0, 0, 1]),
        }
    }

    fn metadata() -> MetadataMovie {
        MetadataMovie {
            title: "Sin City".to_string(),
            year: "2005".to_string(),
            rated: "R".to_string(),
            runtime: "124 min".to_string(),
            genre: "Crime, Thriller".to_string(),
            director: "Frank Miller, Quentin Tarantino, Robert Rodriguez".to_string(),
            writer: "Frank Miller".to_string(),
            actors: "Mickey Rourke, Clive Owen, Bruce Willis".to_string(),
            plot: "A neo-noir crime anthology.".to_string(),
            ratings: vec![RatingEntry::new("Internet Movie Database", "8.0/10")],
            imdb_id: "tt0401792".to_string(),
            kind: "movie".to_string(),
            response: "True".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_titles_and_descriptions_come_from_metadata() {
        let movie = merge_movie(&catalog(), &metadata());
        assert_eq!(movie.title, "Sin City");
        assert_eq!(movie.metadata_title, "Sin City");
        assert_eq!(movie.description, "A neo-noir crime anthology.");
        assert_eq!(movie.plot, movie.description);
    }

    #[test]
    fn test_runtime_uses_catalog_duration() {
        let movie = merge_movie(&catalog(), &metadata());
        assert_eq!(movie.duration, 119);
        assert_eq!(movie.runtime, "119 min");
    }

    #[test]
    fn test_credits_are_split_in_order() {
        let movie = merge_movie(&catalog(), &metadata());
        assert_eq!(
            movie.director,
            vec!["Frank Miller", "Quentin Tarantino", "Robert Rodriguez"]
        );
        assert_eq!(movie.writer, vec!["Frank Miller"]);
        assert_eq!(movie.actors.len(), 3);
    }

    #[test]
    fn test_empty_credits_give_no_names() {
        assert!(split_credits("").is_empty());
        assert_eq!(split_credits("N/A"), vec!["N/A"]);
    }

    #[test]
    fn test_catalog_rating_is_appended() {
        let movie = merge_movie(&catalog(), &metadata());
        assert_eq!(
            movie.ratings,
            vec![
                RatingEntry::new("Internet Movie Database", "8.0/10"),
                RatingEntry::new("Joyn", "3.0/5.0"),
            ]
        );
    }

    #[test]
    fn test_catalog_fields_pass_through() {
        let movie = merge_movie(&catalog(), &metadata());
        assert_eq!(movie.id, 3532674);
        assert_eq!(movie.imdb_id, "tt0401792");
        assert_eq!(movie.languages, vec!["de", "en"]);
        assert_eq!(movie.original_language, "en");
        assert_eq!(movie.production_year, 2005);
        assert_eq!(movie.studios, vec!["Dimension Films"]);
        assert_eq!(movie.genre, "Crime, Thriller");
        assert_eq!(movie.response, "True");
    }

    #[test]
    fn test_merge_is_pure() {
        let catalog_in = catalog();
        let metadata_in = metadata();

        let first = merge_movie(&catalog_in, &metadata_in);
        let second = merge_movie(&catalog_in, &metadata_in);

        assert_eq!(first, second);
        assert_eq!(catalog_in, catalog());
        assert_eq!(metadata_in, metadata());
        assert_eq!(metadata_in.ratings.len(), 1);
    }
}
