// src/store.rs
//
// On-disk cache of raw standings pages: `<dir>/<year>.txt`, stored exactly
// as downloaded so a rebuild can run offline and repeatably.
use std::{fs, path::{Path, PathBuf}};

use crate::error::{Error, Result};
use crate::source::PageSource;

#[derive(Clone, Debug)]
pub struct CachedPageSource {
    dir: PathBuf,
}

impl CachedPageSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{year}.txt"))
    }

    /// Store one page, creating the cache directory when needed.
    pub fn cache(&self, year: i32, text: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(year);
        fs::write(&path, text)?;
        Ok(path)
    }

    /// Re-download every year in `years` from `online` into the cache.
    /// Stops at the first failure; pages already written stay written.
    pub fn refresh(
        &self,
        online: &dyn PageSource,
        years: impl IntoIterator<Item = i32>,
    ) -> Result<usize> {
        let mut n = 0;
        for year in years {
            let text = online.standings_text(year).map_err(|e| e.in_season(year))?;
            let path = self.cache(year, &text)?;
            logf!("Cached {year} → {}", path.display());
            n += 1;
        }
        Ok(n)
    }
}

impl PageSource for CachedPageSource {
    fn standings_text(&self, year: i32) -> Result<String> {
        let path = self.path_for(year);
        fs::read_to_string(&path)
            .map_err(|e| Error::Source(format!("{}: {e}", path.display())))
    }
}
