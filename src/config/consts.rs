// src/config/consts.rs

// Net config
pub const HOST: &str = "thewaffl.net";
pub const PAGE_PATH: &str = "/{year}.php";
pub const USER_AGENT: &str = "waffl_history/0.1";

// Local cache of raw standings pages, one `<year>.txt` per season
pub const CACHE_DIR: &str = ".store/pages";

// Season range. Fantasy Bowl XXVI was played in 2021.
pub const FIRST_SEASON: i32 = 1996;
pub const LAST_SEASON: i32 = 2024;

// Table anchors, tried in order
pub const SEASON_KEYWORDS: &[&str] = &["Week 1"];
pub const POSTSEASON_KEYWORDS: &[&str] = &["Wild Card Week", "Wild Card", "Semi-Finals"];

// Regular weeks are named "Week <n>"; anything else is a playoff week
pub const REGULAR_WEEK_PREFIX: &str = "Week ";

// Reports
pub const DEFAULT_RECORD_COUNT: usize = 10;
pub const THOUSAND_POINTS: u32 = 1000;
