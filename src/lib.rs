// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod progress;
pub mod records;
pub mod scrape;
pub mod source;
pub mod specs;
pub mod store;
pub mod streak;
pub mod teams;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::League;
pub use error::{Error, Result};
pub use scrape::LeagueParser;
