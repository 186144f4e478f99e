// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Read `<cache_dir>/<year>.txt`
    Cached,
    /// Fetch every page from the league site
    Online,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub first_year: i32,
    pub last_year: i32,
    pub source: SourceKind,
    pub cache_dir: PathBuf,
    /// Re-download the range into the cache before parsing
    pub refresh_cache: bool,
    /// External reference data; the bundled table is used when absent
    pub reference: Option<PathBuf>,
    pub show_spellings: bool,
    pub record_count: usize,
    pub log_level: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            first_year: FIRST_SEASON,
            last_year: LAST_SEASON,
            source: SourceKind::Cached,
            cache_dir: PathBuf::from(CACHE_DIR),
            refresh_cache: false,
            reference: None,
            show_spellings: false,
            record_count: DEFAULT_RECORD_COUNT,
            log_level: s!("info"),
        }
    }
}

impl RunOptions {
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.first_year..=self.last_year
    }
}
