//! Catalog line decoder
//!
//! The catalog format is not RFC CSV: the quote character splits each
//! line into exactly three sections (fields before the trait list, the
//! bracketed trait list, fields after it), and only the trait list is
//! quoted. Lines look like:
//!
//! ```text
//! id,generation,name,description,cat1,cat2,"['t1', 't2']",weight,size,difficulty,flag,dd/mm/yyyy
//! ```
//!
//! `cat2` may be empty (single-category record) and `weight`/`size` may
//! be empty, meaning unknown. The comma after the closing quote puts an
//! empty artifact field at the front of the trailing section.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::category::Category;
use crate::error::{CatalogError, CatalogResult};
use crate::record::Record;

/// Parse one catalog line into a [`Record`].
///
/// Any failure yields a [`CatalogError`] and no record; partial parses
/// are never observable.
pub fn parse_record(line: &str) -> CatalogResult<Record> {
    // The quote character delimits the three sections. The catalog data
    // never quotes anything else, so extra sections are ignored; fewer
    // than three means the trait list is missing entirely.
    let sections: Vec<&str> = line.split('"').collect();
    if sections.len() < 3 {
        return Err(CatalogError::malformed(format!(
            "expected 3 quote-delimited sections, found {}",
            sections.len()
        )));
    }

    let pre: Vec<&str> = sections[0].split(',').collect();
    if pre.len() < 5 {
        return Err(CatalogError::malformed(format!(
            "expected at least 5 leading fields, found {}",
            pre.len()
        )));
    }

    let id = parse_number::<u32>(pre[0], "id")?;
    let generation = parse_number::<u32>(pre[1], "generation")?;
    let name = pre[2].to_string();
    let description = pre[3].to_string();

    let mut categories = vec![Category::from_token(pre[4])?];
    match pre.get(5) {
        Some(token) if !token.is_empty() => categories.push(Category::from_token(token)?),
        _ => {}
    }

    let traits = parse_traits(sections[1])?;

    // Trailing fields: the leading artifact, then weight, size,
    // difficulty, rarity flag, and the capture date.
    let post: Vec<&str> = sections[2].split(',').collect();
    if post.len() < 6 {
        return Err(CatalogError::malformed(format!(
            "expected at least 6 trailing fields, found {}",
            post.len()
        )));
    }

    let weight = parse_measurement(post[1], "weight")?;
    let size = parse_measurement(post[2], "size")?;
    let capture_difficulty = parse_number::<u32>(post[3], "capture difficulty")?;
    let is_rare = parse_number::<u32>(post[4], "rarity flag")? == 1;
    let capture_date = parse_date(post[5])?;

    Ok(Record {
        id,
        generation,
        name,
        description,
        categories,
        traits,
        weight,
        size,
        capture_difficulty,
        is_rare,
        capture_date,
    })
}

/// Split the quoted section on `", "`, strip the bracket and quote
/// characters from each token, and drop tokens that end up empty.
fn parse_traits(section: &str) -> CatalogResult<Vec<String>> {
    let traits: Vec<String> = section
        .split(", ")
        .map(|token| {
            token
                .chars()
                .filter(|c| !matches!(c, '[' | ']' | '\''))
                .collect::<String>()
        })
        .filter(|t| !t.is_empty())
        .collect();

    if traits.is_empty() {
        return Err(CatalogError::malformed("empty trait list"));
    }
    Ok(traits)
}

fn parse_number<T: FromStr>(field: &str, what: &str) -> CatalogResult<T> {
    field
        .parse::<T>()
        .map_err(|_| CatalogError::malformed(format!("invalid {what}: {field:?}")))
}

/// Empty measurements mean "unknown" and decode to 0.0; anything else
/// must be a finite float. NaN and infinities are rejected so the
/// measurement ordering stays total.
fn parse_measurement(field: &str, what: &str) -> CatalogResult<f64> {
    if field.is_empty() {
        return Ok(0.0);
    }
    let value = parse_number::<f64>(field, what)?;
    if !value.is_finite() {
        return Err(CatalogError::malformed(format!(
            "invalid {what}: {field:?}"
        )));
    }
    Ok(value)
}

/// Decode a `dd/mm/yyyy` field into a calendar date. Values that do not
/// form a real date (day 31 of February, month 13) are rejected.
fn parse_date(field: &str) -> CatalogResult<NaiveDate> {
    let parts: Vec<&str> = field.split('/').collect();
    if parts.len() < 3 {
        return Err(CatalogError::malformed(format!(
            "invalid capture date: {field:?}"
        )));
    }

    let day = parse_number::<u32>(parts[0], "capture date day")?;
    let month = parse_number::<u32>(parts[1], "capture date month")?;
    let year = parse_number::<i32>(parts[2], "capture date year")?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CatalogError::malformed(format!("{field:?} is not a representable calendar date"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEEDLING: &str =
        "1,1,Seedling,Plant-like,grass,,\"['Overgrow', 'Chlorophyll']\",6.9,0.7,45,0,01/01/1996";

    #[test]
    fn test_parse_single_category_record() {
        let r = parse_record(SEEDLING).unwrap();
        assert_eq!(r.id, 1);
        assert_eq!(r.generation, 1);
        assert_eq!(r.name, "Seedling");
        assert_eq!(r.description, "Plant-like");
        assert_eq!(r.categories, vec![Category::Grass]);
        assert_eq!(r.traits, vec!["Overgrow", "Chlorophyll"]);
        assert_eq!(r.weight, 6.9);
        assert_eq!(r.size, 0.7);
        assert_eq!(r.capture_difficulty, 45);
        assert!(!r.is_rare);
        assert_eq!(r.capture_date, NaiveDate::from_ymd_opt(1996, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_two_categories_and_rare_flag() {
        let line = "150,1,Apex,Engineered,psychic,flying,\"['Pressure']\",122.0,2.0,3,1,12/08/1999";
        let r = parse_record(line).unwrap();
        assert_eq!(r.categories, vec![Category::Psychic, Category::Flying]);
        assert!(r.is_rare);
        assert_eq!(
            r.capture_date,
            NaiveDate::from_ymd_opt(1999, 8, 12).unwrap()
        );
    }

    #[test]
    fn test_empty_measurements_are_unknown() {
        let line = "7,2,Shade,Elusive,ghost,,\"['Levitate']\",,,90,0,30/06/2001";
        let r = parse_record(line).unwrap();
        assert_eq!(r.weight, 0.0);
        assert_eq!(r.size, 0.0);
    }

    #[test]
    fn test_missing_quote_sections_fail() {
        let err = parse_record("1,1,Seedling,Plant-like,grass").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { .. }));
    }

    #[test]
    fn test_unknown_category_fails() {
        let line = "1,1,Seedling,Plant-like,plasma,,\"['Overgrow']\",6.9,0.7,45,0,01/01/1996";
        match parse_record(line) {
            Err(CatalogError::UnknownCategory { token }) => assert_eq!(token, "plasma"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_measurement_fails() {
        let line = "1,1,Seedling,Plant-like,grass,,\"['Overgrow']\",heavy,0.7,45,0,01/01/1996";
        assert!(parse_record(line).is_err());
    }

    #[test]
    fn test_non_finite_measurements_fail() {
        for field in ["NaN", "inf", "-inf"] {
            let line = format!(
                "1,1,Seedling,Plant-like,grass,,\"['Overgrow']\",6.9,{field},45,0,01/01/1996"
            );
            assert!(parse_record(&line).is_err(), "accepted size {field:?}");
        }
    }

    #[test]
    fn test_impossible_date_fails() {
        let line = "1,1,Seedling,Plant-like,grass,,\"['Overgrow']\",6.9,0.7,45,0,31/02/1996";
        assert!(parse_record(line).is_err());
    }

    #[test]
    fn test_trait_list_must_be_non_empty() {
        let line = "1,1,Seedling,Plant-like,grass,,\"[]\",6.9,0.7,45,0,01/01/1996";
        assert!(parse_record(line).is_err());
    }

    #[test]
    fn test_round_trip() {
        let first = parse_record(SEEDLING).unwrap();
        let again = parse_record(&first.to_line()).unwrap();
        assert_eq!(first, again);

        let line = "150,1,Apex,Engineered,psychic,flying,\"['Pressure']\",122.0,2.0,3,1,12/08/1999";
        let first = parse_record(line).unwrap();
        let again = parse_record(&first.to_line()).unwrap();
        assert_eq!(first, again);
    }
}
