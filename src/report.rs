use crate::credits::CREDITS;
use crate::data::Catalog;
use crate::error::Result;
use crate::{grouping, ordering, ranking, titles};
use polars::prelude::*;
use std::io::Write;
use tracing::debug;

pub const DRAMA: &str = "Drama";
pub const COMEDY: &str = "Comedy";
pub const ACTION: &str = "Action";
pub const GLOBAL_MAX_RANK: u32 = 10;

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Overrides the number of rows shown by every section.
    pub rows: Option<IdxSize>,
}

impl ReportOptions {
    fn rows(&self, default: IdxSize) -> IdxSize {
        self.rows.unwrap_or(default)
    }
}

struct Report<'a, W> {
    out: &'a mut W,
}

impl<W: Write> Report<'_, W> {
    fn heading(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "\n{title}")?;
        Ok(())
    }

    fn show(&mut self, section: &str, df: &DataFrame, n: IdxSize) -> Result<()> {
        let df = df.head(Some(n as usize));
        debug!(section, rows = df.height(), "section done");
        writeln!(self.out, "{df}")?;
        Ok(())
    }
}

/// Prints every report section for `catalog`, in order.
pub fn run<W: Write>(catalog: &Catalog, options: &ReportOptions, out: &mut W) -> Result<()> {
    let mut report = Report { out };

    report.heading("1. Cleaned catalog")?;
    writeln!(report.out, "Rows after cleaning: {}", catalog.len())?;
    let columns: Vec<&str> = catalog
        .column_names()
        .into_iter()
        .filter(|&name| name != CREDITS)
        .collect();
    writeln!(report.out, "Columns: {columns:?}")?;

    report.heading("2. Credits (3 examples)")?;
    let credits = catalog.films.select([CREDITS])?;
    report.show("credits", &credits, options.rows(3))?;

    report.heading("3. Oldest films")?;
    let n = options.rows(5);
    report.show("oldest", &ordering::oldest(catalog, n)?, n)?;

    report.heading("4. Most popular films")?;
    let n = options.rows(5);
    report.show("most popular", &ordering::most_popular(catalog, n)?, n)?;

    report.heading(&format!(
        "5. Films over {} minutes",
        ordering::LONG_FILM_MINUTES
    ))?;
    let n = options.rows(5);
    let long = ordering::long_films(catalog, n)?;
    writeln!(report.out, "Total: {}", long.count)?;
    report.show("long films", &long.longest, n)?;

    report.heading("6. Films by genre")?;
    let n = options.rows(10);
    for genre in [DRAMA, COMEDY] {
        report.heading(&format!("{genre} films"))?;
        report.show(genre, &ordering::by_genre(catalog, genre, n)?, n)?;
    }

    report.heading("7. Actors with the most films")?;
    let n = options.rows(5);
    report.show("top actors", &grouping::top_actors(catalog, n)?, n)?;

    report.heading("8. Directors with the most awards")?;
    let n = options.rows(5);
    report.show(
        "award directors",
        &grouping::top_award_directors(catalog, n)?,
        n,
    )?;

    report.heading("9. Most popular awarded film")?;
    let n = options.rows(1);
    report.show(
        "popular awarded",
        &ordering::most_popular_awarded(catalog, n)?,
        n,
    )?;

    report.heading("10. Genres without any award")?;
    let genres = grouping::genres_without_awards(catalog)?;
    let n = options.rows(20);
    report.show("genres without awards", &genres, n)?;

    writeln!(report.out, "\n---- PART 2 ----")?;

    report.heading("1. Popularity ranking within genre")?;
    let ranked = ranking::rank_within_genre(catalog)?;
    let n = options.rows(10);
    for genre in [ACTION, DRAMA] {
        report.heading(&format!("{genre} ranking"))?;
        report.show(genre, &ranking::genre_ranking(&ranked, genre, n)?, n)?;
    }

    report.heading(&format!(
        "Top {GLOBAL_MAX_RANK} films by popularity, all genres"
    ))?;
    let n = options.rows(10);
    report.show(
        "global ranking",
        &ranking::global_ranking(catalog, GLOBAL_MAX_RANK)?,
        n,
    )?;

    report.heading("2. Films per director")?;
    let n = options.rows(5);
    report.show(
        "films per director",
        &grouping::films_per_director(catalog, n)?,
        n,
    )?;

    report.heading("3. Upper-cased titles")?;
    report.show(
        "upper titles",
        &titles::upper_titles(catalog)?,
        options.rows(8),
    )?;

    Ok(())
}

#[cfg(test)]
mod test_report {
    use super::*;
    use crate::data::fixture::*;
    use crate::data::{ACTOR, LENGTH, POPULARITY, TITLE};

    fn render(catalog: &Catalog, options: &ReportOptions) -> Result<String> {
        let mut out = Vec::new();
        run(catalog, options, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_every_section_printed() -> Result<()> {
        let catalog = catalog(&[
            film("Heat")
                .subject(Some("Action"))
                .year(1995)
                .length(170)
                .popularity(70),
            film("Alien").subject(Some("Drama")).year(1979).popularity(90),
            film("Annie Hall")
                .subject(Some("Comedy"))
                .year(1977)
                .popularity(60)
                .awarded(),
        ])?;
        let text = render(&catalog, &ReportOptions::default())?;

        for heading in [
            "1. Cleaned catalog",
            "2. Credits",
            "3. Oldest films",
            "4. Most popular films",
            "5. Films over 120 minutes",
            "Drama films",
            "Comedy films",
            "7. Actors with the most films",
            "8. Directors with the most awards",
            "9. Most popular awarded film",
            "10. Genres without any award",
            "PART 2",
            "Action ranking",
            "Top 10 films by popularity",
            "2. Films per director",
            "3. Upper-cased titles",
        ] {
            assert!(text.contains(heading), "missing section {heading}");
        }
        assert!(text.contains("Rows after cleaning: 3"));
        assert!(text.contains("Total: 1"));
        assert!(text.contains("ANNIE HALL"));
        Ok(())
    }

    #[test]
    fn test_empty_catalog() -> Result<()> {
        let catalog = catalog(&[])?;
        let text = render(&catalog, &ReportOptions { rows: Some(2) })?;

        assert!(text.contains("Rows after cleaning: 0"));
        assert!(text.contains("Total: 0"));
        Ok(())
    }

    #[test]
    fn test_columns_listed_before_credits() -> Result<()> {
        let catalog = catalog(&[film("Heat")])?;
        let text = render(&catalog, &ReportOptions::default())?;

        assert!(text.contains(
            r#"Columns: ["Year", "Length", "Title", "Subject", "Actor", "Actress", "Director", "Popularity", "Awards"]"#
        ));
        Ok(())
    }

    #[test]
    fn test_rows_override() -> Result<()> {
        let catalog = catalog(&[
            film("Heat").year(1995).popularity(70),
            film("Alien").year(1979).popularity(90),
            film("Sleeper").year(1973).popularity(60),
            film("Greed").year(1924).popularity(50),
        ])?;

        let text = render(&catalog, &ReportOptions::default())?;
        assert!(text.contains("shape: (3, 1)"));
        assert!(text.contains("shape: (4, 2)"));

        let text = render(&catalog, &ReportOptions { rows: Some(2) })?;
        assert!(text.contains("shape: (2, 1)"));
        assert!(text.contains("shape: (2, 2)"));
        assert!(!text.contains("shape: (3,"));
        assert!(!text.contains("shape: (4,"));
        Ok(())
    }

    const ROUGH_CSV: &str = "\
Year;Length;Title;Subject;Actor;Actress;Director;Popularity;Awards;*Image
INT;INT;STRING;CAT;CAT;CAT;CAT;INT;BOOL;STRING
1990;111;\"A; B\";Comedy;Banderas, Antonio;Abril, Victoria;Almodóvar, Pedro;68;Yes;x.png
1991;1.5;High Heels;Comedy;Bosé, Miguel;Abril, Victoria;Almodóvar, Pedro;9999999999;No;x.png
1985;100;Short Row;Drama
";

    #[test]
    fn test_load_rough_csv_and_report() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(ROUGH_CSV.as_bytes())?;

        let catalog = Catalog::load(file.path())?;
        let films = &catalog.films;
        assert_eq!(
            strs(films, TITLE)?,
            vec![
                Some("A; B".to_string()),
                Some("High Heels".to_string()),
                Some("Short Row".to_string()),
            ]
        );
        // out of range and fractional integers become missing
        assert_eq!(ints(films, LENGTH)?, vec![Some(111), None, Some(100)]);
        assert_eq!(ints(films, POPULARITY)?, vec![Some(68), None, None]);
        // a short row is padded with missing values
        assert_eq!(strs(films, ACTOR)?[2], None);

        let text = render(&catalog, &ReportOptions::default())?;
        assert!(text.contains("Rows after cleaning: 3"));
        assert!(text.contains("Total: 0"));
        assert!(text.contains("A; B"));
        Ok(())
    }
}
