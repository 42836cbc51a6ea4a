use crate::data::{ACTOR, AWARDED, AWARDS, Catalog, DIRECTOR, SUBJECT};
use polars::prelude::*;
use rustc_hash::FxHashMap as HashMap;

pub const COUNT: &str = "count";
pub const TOTAL_MOVIES: &str = "total_movies";

/// Counts rows per key. Highest count first; equal counts fall back to the
/// key in ascending order, missing key first.
fn count_by<'a>(keys: impl Iterator<Item = Option<&'a str>>) -> Vec<(Option<&'a str>, u32)> {
    let mut counts: HashMap<Option<&str>, u32> = HashMap::default();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_unstable_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
    counts
}

fn counts_frame(key: &str, counts: &[(Option<&str>, u32)], n: IdxSize) -> PolarsResult<DataFrame> {
    let (keys, counts): (Vec<_>, Vec<_>) = counts.iter().take(n as usize).copied().unzip();
    df!(key => keys, COUNT => counts)
}

/// Actors by number of films. A missing actor is a group of its own.
pub fn top_actors(catalog: &Catalog, n: IdxSize) -> PolarsResult<DataFrame> {
    let films = &catalog.films;
    let counts = count_by(films.column(ACTOR)?.str()?.into_iter());
    counts_frame(ACTOR, &counts, n)
}

/// Directors by number of awarded films.
pub fn top_award_directors(catalog: &Catalog, n: IdxSize) -> PolarsResult<DataFrame> {
    let films = &catalog.films;
    let counts = count_by(
        films
            .column(AWARDS)?
            .str()?
            .into_iter()
            .zip(films.column(DIRECTOR)?.str()?)
            .filter_map(|(awards, director)| (awards == Some(AWARDED)).then_some(director)),
    );
    counts_frame(DIRECTOR, &counts, n)
}

/// Directors by number of films, ignoring films without a director.
pub fn films_per_director(catalog: &Catalog, n: IdxSize) -> PolarsResult<DataFrame> {
    let films = &catalog.films;
    let counts = count_by(
        films
            .column(DIRECTOR)?
            .str()?
            .into_iter()
            .filter(Option::is_some),
    );
    counts_frame(DIRECTOR, &counts, n)
}

/// Genres none of whose films won an award, with their film count, by genre.
pub fn genres_without_awards(catalog: &Catalog) -> PolarsResult<DataFrame> {
    let films = &catalog.films;

    // subject -> (awarded, total)
    let mut genres: HashMap<Option<&str>, (u32, u32)> = HashMap::default();
    for (subject, awards) in films
        .column(SUBJECT)?
        .str()?
        .into_iter()
        .zip(films.column(AWARDS)?.str()?)
    {
        let (awarded, total) = genres.entry(subject).or_default();
        if awards == Some(AWARDED) {
            *awarded += 1;
        }
        *total += 1;
    }

    let mut genres: Vec<(Option<&str>, u32)> = genres
        .into_iter()
        .filter_map(|(subject, (awarded, total))| (awarded == 0).then_some((subject, total)))
        .collect();
    genres.sort_unstable_by_key(|(subject, _)| *subject);

    let (subjects, totals): (Vec<_>, Vec<_>) = genres.into_iter().unzip();
    df!(SUBJECT => subjects, TOTAL_MOVIES => totals)
}
