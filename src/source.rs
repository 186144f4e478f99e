// src/source.rs
//
// Where raw standings pages come from. The parser only ever asks for one
// year's text; whether that is a live fetch or a file on disk is up to the
// source.
use crate::config::consts::{HOST, PAGE_PATH};
use crate::core::net::http_get;
use crate::error::Result;

pub trait PageSource {
    /// Full text of the standings page for `year`.
    fn standings_text(&self, year: i32) -> Result<String>;
}

/// Fetches `http://<host>/<year>.php`.
#[derive(Clone, Debug)]
pub struct OnlinePageSource {
    host: String,
}

impl OnlinePageSource {
    pub fn new() -> Self {
        Self { host: s!(HOST) }
    }

    pub fn with_host(host: &str) -> Self {
        Self { host: s!(host) }
    }

    pub fn page_path(year: i32) -> String {
        PAGE_PATH.replace("{year}", &year.to_string())
    }
}

impl Default for OnlinePageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for OnlinePageSource {
    fn standings_text(&self, year: i32) -> Result<String> {
        let path = Self::page_path(year);
        logd!("GET {}{path}", self.host);
        http_get(&self.host, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_path_per_year() {
        assert_eq!(OnlinePageSource::page_path(1999), "/1999.php");
        assert_eq!(OnlinePageSource::page_path(2024), "/2024.php");
    }
}
