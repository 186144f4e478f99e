// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a history rebuild. None of these are recovered
/// locally: a bad line is fixed by adding a reference-data patch.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no table anchored by any of {keywords:?}")]
    TableNotFound { keywords: Vec<String> },

    #[error("{week}: malformed game line {line:?}")]
    MalformedGameLine { week: String, line: String },

    #[error("no trailing score in {text:?}")]
    UnresolvedScoreFormat { text: String },

    #[error("{week}: {line:?} pairs a team with itself")]
    SameTeam { week: String, line: String },

    #[error("{home} v {away} is tied at {score}; no winner or loser")]
    TiedGameQuery { home: String, away: String, score: u32 },

    #[error("unexpected table layout: {0}")]
    Markup(String),

    #[error("season {year}: {source}")]
    Season {
        year: i32,
        #[source]
        source: Box<Error>,
    },

    #[error("page source: {0}")]
    Source(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("reference data: {0}")]
    ReferenceData(#[from] toml::de::Error),
}

impl Error {
    /// Attach the failing season so the run's final message names it.
    pub fn in_season(self, year: i32) -> Self {
        match self {
            Error::Season { .. } => self,
            other => Error::Season { year, source: Box::new(other) },
        }
    }

    /// Name the week a line-level failure happened in.
    pub fn in_week(self, week: &str) -> Self {
        match self {
            Error::MalformedGameLine { line, .. } => Error::MalformedGameLine { week: s!(week), line },
            Error::SameTeam { line, .. } => Error::SameTeam { week: s!(week), line },
            other => other,
        }
    }

    /// The innermost error, looking through the season wrapper.
    pub fn root(&self) -> &Error {
        match self {
            Error::Season { source, .. } => source.root(),
            other => other,
        }
    }
}
