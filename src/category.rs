//! The closed set of record categories
//!
//! Category tokens in the catalog file are matched case-insensitively
//! against this fixed enumeration; anything else is a data error, not a
//! free-form label.

use std::fmt;

use crate::error::{CatalogError, CatalogResult};

/// One of the fixed catalog categories. Every record carries one or two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl Category {
    /// Canonical uppercase name, the form comparisons are defined over.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bug => "BUG",
            Category::Dark => "DARK",
            Category::Dragon => "DRAGON",
            Category::Electric => "ELECTRIC",
            Category::Fairy => "FAIRY",
            Category::Fighting => "FIGHTING",
            Category::Fire => "FIRE",
            Category::Flying => "FLYING",
            Category::Ghost => "GHOST",
            Category::Grass => "GRASS",
            Category::Ground => "GROUND",
            Category::Ice => "ICE",
            Category::Normal => "NORMAL",
            Category::Poison => "POISON",
            Category::Psychic => "PSYCHIC",
            Category::Rock => "ROCK",
            Category::Steel => "STEEL",
            Category::Water => "WATER",
        }
    }

    /// Lowercase name used by the display format and line rendering.
    pub fn display_name(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Look up a raw catalog token. Matching is case-insensitive; an
    /// unknown token fails rather than falling back to any default.
    pub fn from_token(token: &str) -> CatalogResult<Self> {
        match token.to_uppercase().as_str() {
            "BUG" => Ok(Category::Bug),
            "DARK" => Ok(Category::Dark),
            "DRAGON" => Ok(Category::Dragon),
            "ELECTRIC" => Ok(Category::Electric),
            "FAIRY" => Ok(Category::Fairy),
            "FIGHTING" => Ok(Category::Fighting),
            "FIRE" => Ok(Category::Fire),
            "FLYING" => Ok(Category::Flying),
            "GHOST" => Ok(Category::Ghost),
            "GRASS" => Ok(Category::Grass),
            "GROUND" => Ok(Category::Ground),
            "ICE" => Ok(Category::Ice),
            "NORMAL" => Ok(Category::Normal),
            "POISON" => Ok(Category::Poison),
            "PSYCHIC" => Ok(Category::Psychic),
            "ROCK" => Ok(Category::Rock),
            "STEEL" => Ok(Category::Steel),
            "WATER" => Ok(Category::Water),
            _ => Err(CatalogError::unknown_category(token)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
