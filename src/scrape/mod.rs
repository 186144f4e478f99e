// src/scrape/mod.rs
mod league;

pub use league::LeagueParser;
