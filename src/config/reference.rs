// src/config/reference.rs
//
// Hand-maintained knowledge about the archived pages: spellings, franchise
// renames, owners, and literal fixes for data-entry mistakes. This is data,
// versioned alongside the crate in `data/reference.toml`, and can be swapped
// for an external file when the source is revisited.
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::sanitize::normalize_ws;
use crate::error::Result;

const BUNDLED: &str = include_str!("../../data/reference.toml");

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReferenceData {
    /// Misspelling → correct (canonical or older) name
    pub corrections: BTreeMap<String, String>,
    /// Old franchise name → newer name; chains are followed to the end
    pub renames: BTreeMap<String, String>,
    /// Canonical name → owner
    pub owners: BTreeMap<String, String>,
    pub patches: Vec<TextPatch>,
    pub playoff_fallbacks: Vec<FallbackLine>,
    pub structure: StructureRules,
}

/// Replace one game line of a given week. `to` may hold several lines when the
/// source crammed two games into one cell.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TextPatch {
    pub year: i32,
    pub week: String,
    pub from: String,
    pub to: Vec<String>,
}

/// Full score line for a playoff cell that holds free text with no structure.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FallbackLine {
    pub week: String,
    pub line: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct WeekKey {
    pub year: i32,
    pub week: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct TrailingRow {
    pub from_year: i32,
    pub row_count: usize,
}

/// Layout exceptions the extractors consult by year (and week).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StructureRules {
    /// Seasons whose table opens with a row of special games
    pub special_games_years: Vec<i32>,
    /// Weeks whose games sit three `div` levels under the cell wrapper
    pub deep_nested_weeks: Vec<WeekKey>,
    /// Decorative last row on the playoff table
    pub playoff_trailing_row: Option<TrailingRow>,
    /// From this season on, playoff cells without `div`s fall back to
    /// `playoff_fallbacks`, then to `font` children
    pub playoff_fallback_from: Option<i32>,
}

impl ReferenceData {
    /// The table shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The patch for one source line, if any. Whitespace differences are ignored.
    pub fn patch_for(&self, year: i32, week: &str, line: &str) -> Option<&TextPatch> {
        let line = normalize_ws(line);
        self.patches
            .iter()
            .find(|p| p.year == year && p.week == week && normalize_ws(&p.from) == line)
    }

    pub fn fallback_for(&self, week: &str) -> Option<&str> {
        self.playoff_fallbacks
            .iter()
            .find(|f| f.week == week)
            .map(|f| f.line.as_str())
    }
}

impl StructureRules {
    pub fn has_special_games(&self, year: i32) -> bool {
        self.special_games_years.contains(&year)
    }

    pub fn is_deep_nested(&self, year: i32, week: &str) -> bool {
        self.deep_nested_weeks.iter().any(|k| k.year == year && k.week == week)
    }

    pub fn drops_trailing_row(&self, year: i32, rows: usize) -> bool {
        self.playoff_trailing_row
            .is_some_and(|r| year >= r.from_year && rows == r.row_count)
    }

    pub fn uses_playoff_fallback(&self, year: i32) -> bool {
        self.playoff_fallback_from.is_some_and(|from| year >= from)
    }
}
