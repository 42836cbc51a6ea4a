use crate::data::{Catalog, TITLE};
use polars::prelude::*;

pub const TITLE_UPPER: &str = "TITLE_UPPER";

/// A missing or empty title stays missing.
pub fn upper(title: Option<&str>) -> Option<String> {
    title.filter(|t| !t.is_empty()).map(str::to_uppercase)
}

/// Title next to its upper-cased form, one row per film.
pub fn upper_titles(catalog: &Catalog) -> PolarsResult<DataFrame> {
    let titles = catalog.films.column(TITLE)?;
    let upper_cased: Vec<Option<String>> = titles.str()?.into_iter().map(upper).collect();

    DataFrame::new(vec![
        titles.clone(),
        Column::new(TITLE_UPPER.into(), upper_cased),
    ])
}

#[cfg(test)]
mod test_titles {
    use super::*;
    use crate::data::fixture::*;

    #[test]
    fn test_upper() {
        assert_eq!(upper(Some("abc")), Some("ABC".to_string()));
        assert_eq!(upper(Some("Amélie")), Some("AMÉLIE".to_string()));
        assert_eq!(upper(Some("")), None);
        assert_eq!(upper(None), None);
    }

    #[test]
    fn test_upper_titles() -> PolarsResult<()> {
        let catalog = catalog(&[film("Days of Heaven"), film("8½")])?;
        let res = upper_titles(&catalog)?;

        assert_eq!(res.get_column_names_str(), &[TITLE, TITLE_UPPER]);
        assert_eq!(
            strs(&res, TITLE_UPPER)?,
            vec![Some("DAYS OF HEAVEN".to_string()), Some("8½".to_string())]
        );
        Ok(())
    }
}
