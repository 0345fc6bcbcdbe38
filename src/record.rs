//! The catalog record value type
//!
//! A `Record` is constructed once by the parser and only read afterward.
//! Cloning one yields independently owned `categories` and `traits`
//! sequences; the scalar fields copy by value.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use itertools::Itertools;

use crate::category::Category;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u32,
    pub generation: u32,
    pub name: String,
    pub description: String,
    /// Always 1 or 2 entries; the parser enforces this.
    pub categories: Vec<Category>,
    /// Free-text labels, at least one, input order preserved.
    pub traits: Vec<String>,
    /// Kilograms; 0.0 means "unknown" in the source data.
    pub weight: f64,
    /// Metres; 0.0 means "unknown" in the source data.
    pub size: f64,
    pub capture_difficulty: u32,
    pub is_rare: bool,
    pub capture_date: NaiveDate,
}

impl Record {
    /// Textual name of the primary category, the key used by the
    /// category ordering.
    pub fn primary_category(&self) -> &'static str {
        self.categories[0].as_str()
    }

    /// Render the record back into the catalog line layout it was
    /// parsed from. Parsing the result reproduces every field.
    pub fn to_line(&self) -> String {
        let second = self
            .categories
            .get(1)
            .map(|c| c.display_name())
            .unwrap_or_default();
        let traits = self.traits.iter().map(|t| format!("'{t}'")).join(", ");

        format!(
            "{},{},{},{},{},{},\"[{}]\",{},{},{},{},{:02}/{:02}/{:04}",
            self.id,
            self.generation,
            self.name,
            self.description,
            self.categories[0].display_name(),
            second,
            traits,
            self.weight,
            self.size,
            self.capture_difficulty,
            if self.is_rare { 1 } else { 0 },
            self.capture_date.day(),
            self.capture_date.month(),
            self.capture_date.year(),
        )
    }
}

impl fmt::Display for Record {
    /// Bracketed one-line summary, categories lowercased and the date
    /// zero-padded as dd/mm/yyyy.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let categories = self
            .categories
            .iter()
            .map(|c| format!("'{}'", c.display_name()))
            .join(", ");
        let traits = self.traits.iter().map(|t| format!("'{t}'")).join(", ");

        write!(
            f,
            "[#{} -> {}: {} - [{}] - [{}] - {}kg - {}m - {}% - {} - {} gen] - {:02}/{:02}/{:04}",
            self.id,
            self.name,
            self.description,
            categories,
            traits,
            self.weight,
            self.size,
            self.capture_difficulty,
            self.is_rare,
            self.generation,
            self.capture_date.day(),
            self.capture_date.month(),
            self.capture_date.year(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            id: 1,
            generation: 1,
            name: "Seedling".to_string(),
            description: "Plant-like".to_string(),
            categories: vec![Category::Grass],
            traits: vec!["Overgrow".to_string(), "Chlorophyll".to_string()],
            weight: 6.9,
            size: 0.7,
            capture_difficulty: 45,
            is_rare: false,
            capture_date: NaiveDate::from_ymd_opt(1996, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            sample().to_string(),
            "[#1 -> Seedling: Plant-like - ['grass'] - ['Overgrow', 'Chlorophyll'] \
             - 6.9kg - 0.7m - 45% - false - 1 gen] - 01/01/1996"
        );
    }

    #[test]
    fn test_display_two_categories() {
        let mut r = sample();
        r.categories.push(Category::Poison);
        assert!(r.to_string().contains("['grass', 'poison']"));
    }

    #[test]
    fn test_to_line_layout() {
        assert_eq!(
            sample().to_line(),
            "1,1,Seedling,Plant-like,grass,,\"['Overgrow', 'Chlorophyll']\",6.9,0.7,45,0,01/01/1996"
        );
    }

    #[test]
    fn test_clone_owns_its_sequences() {
        let original = sample();
        let mut copy = original.clone();
        copy.traits.push("Solar Power".to_string());
        copy.categories.push(Category::Poison);

        assert_eq!(original.traits.len(), 2);
        assert_eq!(original.categories.len(), 1);
    }
}
