use crate::data::{AWARDED, AWARDS, Catalog, LENGTH, POPULARITY, SUBJECT, TITLE, YEAR};
use polars::prelude::*;

/// Films longer than this many minutes count as long.
pub const LONG_FILM_MINUTES: i32 = 120;

// Ascending sorts keep missing values first, descending ones push them last.
fn ascending() -> SortMultipleOptions {
    SortMultipleOptions::default().with_maintain_order(true)
}

fn descending() -> SortMultipleOptions {
    SortMultipleOptions::default()
        .with_order_descending(true)
        .with_nulls_last(true)
        .with_maintain_order(true)
}

/// SELECT Year, Title FROM films ORDER BY Year LIMIT n
pub fn oldest(catalog: &Catalog, n: IdxSize) -> PolarsResult<DataFrame> {
    catalog
        .films
        .clone()
        .lazy()
        .sort_by_exprs([col(YEAR)], ascending())
        .select([col(YEAR), col(TITLE)])
        .limit(n)
        .collect()
}

/// SELECT Title, Popularity FROM films ORDER BY Popularity DESC, Title LIMIT n
pub fn most_popular(catalog: &Catalog, n: IdxSize) -> PolarsResult<DataFrame> {
    catalog
        .films
        .clone()
        .lazy()
        .sort_by_exprs(
            [col(POPULARITY), col(TITLE)],
            SortMultipleOptions::default()
                .with_order_descending_multi([true, false])
                .with_nulls_last_multi([true, false])
                .with_maintain_order(true),
        )
        .select([col(TITLE), col(POPULARITY)])
        .limit(n)
        .collect()
}

pub struct LongFilms {
    /// Number of films over the threshold.
    pub count: usize,
    /// The longest of them, Title and Length.
    pub longest: DataFrame,
}

pub fn long_films(catalog: &Catalog, n: IdxSize) -> PolarsResult<LongFilms> {
    let long = catalog
        .films
        .clone()
        .lazy()
        .filter(col(LENGTH).gt(lit(LONG_FILM_MINUTES)))
        .collect()?;

    let count = long.height();
    let longest = long
        .lazy()
        .select([col(TITLE), col(LENGTH)])
        .sort_by_exprs([col(LENGTH)], descending())
        .limit(n)
        .collect()?;

    Ok(LongFilms { count, longest })
}

/// First `n` films of one genre, in file order.
pub fn by_genre(catalog: &Catalog, genre: &str, n: IdxSize) -> PolarsResult<DataFrame> {
    catalog
        .films
        .clone()
        .lazy()
        .filter(col(SUBJECT).eq(lit(genre)))
        .select([col(TITLE), col(SUBJECT), col(YEAR)])
        .limit(n)
        .collect()
}

/// SELECT Title, Popularity, Awards FROM films WHERE Awards = 'Yes'
/// ORDER BY Popularity DESC LIMIT n
pub fn most_popular_awarded(catalog: &Catalog, n: IdxSize) -> PolarsResult<DataFrame> {
    catalog
        .films
        .clone()
        .lazy()
        .filter(col(AWARDS).eq(lit(AWARDED)))
        .sort_by_exprs([col(POPULARITY)], descending())
        .select([col(TITLE), col(POPULARITY), col(AWARDS)])
        .limit(n)
        .collect()
}
