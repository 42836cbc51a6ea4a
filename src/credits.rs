use crate::data::{ACTOR, ACTRESS, DIRECTOR, TITLE};
use polars::prelude::*;

pub const CREDITS: &str = "Credits";

/// `"{title} : a {actor} and {actress} film's, directed by {director}"`.
///
/// Like a SQL `concat`, a missing part makes the whole line missing.
pub fn credits(
    title: Option<&str>,
    actor: Option<&str>,
    actress: Option<&str>,
    director: Option<&str>,
) -> Option<String> {
    Some(format!(
        "{} : a {} and {} film's, directed by {}",
        title?, actor?, actress?, director?
    ))
}

/// Appends the Credits column to the film table.
pub fn with_credits(mut films: DataFrame) -> PolarsResult<DataFrame> {
    let lines: Vec<Option<String>> = films
        .column(TITLE)?
        .str()?
        .into_iter()
        .zip(films.column(ACTOR)?.str()?)
        .zip(films.column(ACTRESS)?.str()?)
        .zip(films.column(DIRECTOR)?.str()?)
        .map(|(((title, actor), actress), director)| credits(title, actor, actress, director))
        .collect();

    films.with_column(Series::new(CREDITS.into(), lines))?;
    Ok(films)
}
