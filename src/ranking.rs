use crate::data::{Catalog, POPULARITY, SUBJECT, TITLE};
use polars::prelude::*;
use rustc_hash::FxHashMap as HashMap;
use std::cmp::Ordering;

pub const RANKING: &str = "ranking";
pub const GLOBAL_RANK: &str = "global_rank";

fn popularity_desc(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Dense rank of `rows` by popularity, most popular first. Equal popularity
/// shares a rank and the next value gets the following rank, so ranks run
/// 1..=distinct values. Returned in rank order; ties keep the input order.
pub fn dense_rank(mut rows: Vec<usize>, popularity: &[Option<i32>]) -> Vec<(usize, u32)> {
    rows.sort_by(|&a, &b| popularity_desc(popularity[a], popularity[b]));

    let mut ranked = Vec::with_capacity(rows.len());
    let mut rank = 0;
    let mut prev = None;
    for row in rows {
        let value = popularity[row];
        if prev != Some(value) {
            rank += 1;
            prev = Some(value);
        }
        ranked.push((row, rank));
    }
    ranked
}

struct Columns<'a> {
    subjects: Vec<Option<&'a str>>,
    titles: Vec<Option<&'a str>>,
    popularity: Vec<Option<i32>>,
}

impl<'a> Columns<'a> {
    fn new(films: &'a DataFrame) -> PolarsResult<Self> {
        Ok(Columns {
            subjects: films.column(SUBJECT)?.str()?.into_iter().collect(),
            titles: films.column(TITLE)?.str()?.into_iter().collect(),
            popularity: films.column(POPULARITY)?.i32()?.into_iter().collect(),
        })
    }

    fn pick(&self, ranked: &[(usize, u32)]) -> Picked<'a> {
        let mut picked = Picked::default();
        for &(row, rank) in ranked {
            picked.subjects.push(self.subjects[row]);
            picked.titles.push(self.titles[row]);
            picked.popularity.push(self.popularity[row]);
            picked.ranks.push(rank);
        }
        picked
    }
}

#[derive(Default)]
struct Picked<'a> {
    subjects: Vec<Option<&'a str>>,
    titles: Vec<Option<&'a str>>,
    popularity: Vec<Option<i32>>,
    ranks: Vec<u32>,
}

/// Every film ranked by popularity within its genre. Rows come grouped by
/// genre (ascending), then by rank.
pub fn rank_within_genre(catalog: &Catalog) -> PolarsResult<DataFrame> {
    let columns = Columns::new(&catalog.films)?;

    let mut partitions: HashMap<Option<&str>, Vec<usize>> = HashMap::default();
    for (row, subject) in columns.subjects.iter().enumerate() {
        partitions.entry(*subject).or_default().push(row);
    }
    let mut partitions: Vec<_> = partitions.into_iter().collect();
    partitions.sort_unstable_by_key(|(subject, _)| *subject);

    let ranked: Vec<(usize, u32)> = partitions
        .into_iter()
        .flat_map(|(_, rows)| dense_rank(rows, &columns.popularity))
        .collect();

    let picked = columns.pick(&ranked);
    df!(
        SUBJECT => picked.subjects,
        TITLE => picked.titles,
        POPULARITY => picked.popularity,
        RANKING => picked.ranks
    )
}

/// The first `n` ranked films of one genre, out of [`rank_within_genre`].
pub fn genre_ranking(ranked: &DataFrame, genre: &str, n: IdxSize) -> PolarsResult<DataFrame> {
    ranked
        .clone()
        .lazy()
        .filter(col(SUBJECT).eq(lit(genre)))
        .limit(n)
        .collect()
}

/// Films ranked by popularity across all genres, keeping ranks up to
/// `max_rank`, in rank order.
pub fn global_ranking(catalog: &Catalog, max_rank: u32) -> PolarsResult<DataFrame> {
    let columns = Columns::new(&catalog.films)?;

    let rows = (0..catalog.films.height()).collect();
    let ranked: Vec<(usize, u32)> = dense_rank(rows, &columns.popularity)
        .into_iter()
        .take_while(|&(_, rank)| rank <= max_rank)
        .collect();

    let picked = columns.pick(&ranked);
    df!(
        TITLE => picked.titles,
        SUBJECT => picked.subjects,
        POPULARITY => picked.popularity,
        GLOBAL_RANK => picked.ranks
    )
}
