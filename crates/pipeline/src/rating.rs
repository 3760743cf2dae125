//! Converts the catalog's star histogram into a rating entry.
//!
//! The metadata provider reports ratings as `{Source, Value}` text pairs
//! ("8.0/10", "84%"). The catalog only has vote counts per star level, so we
//! compute the weighted mean and render it the same way: `"4.2/5.0"`.

use records::{RatingEntry, UserRating};

/// Source label of the synthesized catalog rating
pub const CATALOG_RATING_SOURCE: &str = "Joyn";

/// Value reported when the histogram has no votes at all.
///
/// Every real vote is at least one star, so `0.0` never collides with a
/// computed mean.
pub const NO_VOTES_VALUE: &str = "0.0/5.0";

/// Weighted mean star level, or `None` when nobody voted
///
/// mean = (1*c1 + 2*c2 + 3*c3 + 4*c4 + 5*c5) / (c1 + c2 + c3 + c4 + c5)
///
/// Sums are taken in `u128`, so any `u64` counts fit.
pub fn average_stars(rating: &UserRating) -> Option<f64> {
    let total = rating.total();
    if total == 0 {
        return None;
    }

    let weighted: u128 = rating
        .counts()
        .iter()
        .zip(1u128..)
        .map(|(&count, stars)| u128::from(count) * stars)
        .sum();

    Some(weighted as f64 / total as f64)
}

/// Build the `{Source: "Joyn", Value: "<mean>/5.0"}` entry
///
/// The mean is rounded to one decimal with ties going away from zero
/// (3.25 renders as "3.3").
pub fn synthesize_rating(rating: &UserRating) -> RatingEntry {
    let value = match average_stars(rating) {
        Some(mean) => format!("{:.1}/5.0", (mean * 10.0).round() / 10.0),
        None => NO_VOTES_VALUE.to_string(),
    };
    RatingEntry::new(CATALOG_RATING_SOURCE, value)
}
