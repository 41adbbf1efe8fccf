//! Plain-text rendering of catalog records.

use crate::models::Movie;
use std::fmt::Write;

const CARD_GENRES: usize = 3;

#[must_use]
pub fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite { "★ Remove" } else { "☆ Favorite" }
}

/// One grid card: title, id, year, the first few genre tags and the toggle.
#[must_use]
pub fn card(movie: &Movie, is_favorite: bool) -> String {
    let mut out = format!("{} [{}]\n", movie.title, movie.id);

    if let Some(year) = movie.year.as_deref().filter(|year| !year.is_empty()) {
        let _ = writeln!(out, "  {year}");
    }

    let genres: Vec<&str> = movie
        .genre
        .iter()
        .take(CARD_GENRES)
        .map(String::as_str)
        .collect();
    if !genres.is_empty() {
        let _ = writeln!(out, "  {}", genres.join(" · "));
    }

    let _ = writeln!(out, "  {}", favorite_label(is_favorite));
    out
}

/// A heading followed by one card per movie.
pub fn grid(heading: &str, movies: &[Movie], is_favorite: impl Fn(&Movie) -> bool) -> String {
    let mut out = format!("{heading}\n{:-<60}\n", "");
    for movie in movies {
        out.push_str(&card(movie, is_favorite(movie)));
        out.push('\n');
    }
    out
}

/// Single-record page. A missing description leaves its line empty.
#[must_use]
pub fn detail(movie: &Movie) -> String {
    let mut out = format!("{}\n{:-<60}\n", movie.title, "");
    let _ = writeln!(out, "Image: {}", movie.image);
    let _ = writeln!(out, "{}", movie.description.as_deref().unwrap_or_default());
    let _ = writeln!(
        out,
        "Year: {}    Rating: {}",
        movie.year.as_deref().unwrap_or_default(),
        movie.rating.map(|r| r.to_string()).unwrap_or_default()
    );
    out
}
