use crate::credits;
use crate::error::{Error, Result};
use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

// film.csv (semicolon separated, one header line):
//     Year integer,
//     Length integer,          -- minutes
//     Title text,
//     Subject text,            -- genre
//     Actor text,
//     Actress text,
//     Director text,
//     Popularity integer,
//     Awards text,             -- "Yes" when the film won an award
//     *Image text              -- dropped right after load
//
// The first data line repeats the column types ("INT;INT;STRING;...") and
// unknown genres are spelled "NULL".

pub const YEAR: &str = "Year";
pub const LENGTH: &str = "Length";
pub const TITLE: &str = "Title";
pub const SUBJECT: &str = "Subject";
pub const ACTOR: &str = "Actor";
pub const ACTRESS: &str = "Actress";
pub const DIRECTOR: &str = "Director";
pub const POPULARITY: &str = "Popularity";
pub const AWARDS: &str = "Awards";
pub const IMAGE: &str = "Image";

/// Title carried by the line that echoes the column types.
pub const TYPE_HEADER_TITLE: &str = "STRING";
/// Genre placeholder for films whose subject is unknown.
pub const NULL_SUBJECT: &str = "NULL";
/// Awards value marking an awarded film.
pub const AWARDED: &str = "Yes";

pub fn film_schema() -> Schema {
    let mut schema = Schema::with_capacity(10);
    for (name, dtype) in [
        (YEAR, DataType::Int32),
        (LENGTH, DataType::Int32),
        (TITLE, DataType::String),
        (SUBJECT, DataType::String),
        (ACTOR, DataType::String),
        (ACTRESS, DataType::String),
        (DIRECTOR, DataType::String),
        (POPULARITY, DataType::Int32),
        (AWARDS, DataType::String),
        (IMAGE, DataType::String),
    ] {
        schema.with_column(name.into(), dtype);
    }
    schema
}

/// Reads the raw catalog. Cells that do not parse against the schema become
/// nulls; only an unreadable file is an error.
pub fn read_films(path: &Path) -> Result<DataFrame> {
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let parse_options = CsvParseOptions::default()
        .with_separator(b';')
        .with_encoding(CsvEncoding::LossyUtf8)
        .with_missing_is_null(true)
        .with_truncate_ragged_lines(true);

    CsvReadOptions::default()
        .with_parse_options(parse_options)
        .with_has_header(true)
        .with_schema(Some(Arc::new(film_schema())))
        .with_ignore_errors(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(read_err)?
        .finish()
        .map_err(read_err)
}

/// Drops the type echo line and the films of unknown genre, then the image
/// column. A missing Title or Subject never compares unequal to a sentinel,
/// so those rows go too.
pub fn clean(films: DataFrame) -> PolarsResult<DataFrame> {
    let cleaned = films
        .lazy()
        .filter(
            col(TITLE)
                .neq(lit(TYPE_HEADER_TITLE))
                .and(col(SUBJECT).neq(lit(NULL_SUBJECT))),
        )
        .collect()?;

    match cleaned.get_column_index(IMAGE) {
        Some(_) => cleaned.drop(IMAGE),
        None => Ok(cleaned),
    }
}

/// The cleaned film table with its derived Credits column. Never mutated
/// after construction; every query reads from it.
pub struct Catalog {
    pub films: DataFrame,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("reading {}", path.display());
        let raw = read_films(path)?;
        debug!("raw shape {:?}", raw.shape());
        Ok(Self::from_raw(raw)?)
    }

    pub fn from_raw(raw: DataFrame) -> PolarsResult<Self> {
        let before = raw.height();
        let films = credits::with_credits(clean(raw)?)?;
        info!(
            rows = films.height(),
            dropped = before - films.height(),
            "catalog cleaned"
        );
        Ok(Catalog { films })
    }

    pub fn len(&self) -> usize {
        self.films.height()
    }

    pub fn is_empty(&self) -> bool {
        self.films.height() == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.films.get_column_names_str()
    }
}
