// src/specs/mod.rs
//! # Standings page “specs”
//!
//! Each yearly standings page holds two tables we care about: the regular
//! season grid and the playoff bracket. The modules here know **how to read
//! those tables** once they have been located and normalized.
//!
//! ## What lives here
//! - **Week extraction** from header/body row pairs (`season`, `postseason`).
//! - **Cell splitting**: turning one cell's nested `div`/`font` soup into
//!   individual game lines. The nesting changed from year to year; the
//!   dispatch is driven by element counts and tag names, plus a short list
//!   of year/week rules from `config::reference::StructureRules`.
//! - **Literal patches** for known data-entry mistakes, looked up in the
//!   reference data before a line is parsed.
//! - **Game lines** (`line`): "Team A 120, Team B 99" → two sides.
//!
//! ## What does **not** live here
//! - Fetching or caching pages (`source`, `store`).
//! - Year ordering and error context (`scrape`).
//! - Any attempt to guess at a new layout. An unexpected shape is an error;
//!   fix it with a new rule or patch in the reference data.
//!
//! ## Conventions
//! - Only direct children are inspected at each step; depth is explicit.
//! - Home is the first team on a line, away the second.
//! - Lines are trimmed; blank lines and bye markers produce no game.

pub mod line;
pub mod postseason;
pub mod season;

use crate::config::reference::ReferenceData;
use crate::data::{League, SeasonId, WeekId};
use crate::error::{Error, Result};
use crate::teams::TeamResolver;

use line::{parse_line, ParsedLine};

/// Everything an extractor writes into while reading one season's tables.
pub struct SeasonContext<'a> {
    pub league: &'a mut League,
    pub resolver: &'a mut TeamResolver,
    pub reference: &'a ReferenceData,
    pub year: i32,
    pub season: SeasonId,
}

impl SeasonContext<'_> {
    /// Apply literal patches for this week. A patched line may expand into several.
    pub fn patched(&self, week: &str, lines: Vec<String>) -> Vec<String> {
        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            match self.reference.patch_for(self.year, week, &line) {
                Some(patch) => {
                    logd!("{} {week}: patched {line:?} → {:?}", self.year, patch.to);
                    out.extend(patch.to.iter().cloned());
                }
                None => out.push(line),
            }
        }
        out
    }

    /// Parse one line and, if it is a game, resolve both teams and record it.
    pub fn record_line(&mut self, week: WeekId, week_name: &str, line: &str) -> Result<()> {
        let ParsedLine::Game(home, away) = parse_line(line).map_err(|e| e.in_week(week_name))? else {
            return Ok(());
        };

        let home_team = self.resolver.resolve(self.league, &home.name);
        let away_team = self.resolver.resolve(self.league, &away.name);
        if home_team == away_team {
            return Err(Error::SameTeam { week: s!(week_name), line: s!(line.trim()) });
        }

        self.league.add_game(week, (home_team, home.score), (away_team, away.score));
        Ok(())
    }

    pub fn record_lines(&mut self, week: WeekId, week_name: &str, lines: Vec<String>) -> Result<()> {
        for line in self.patched(week_name, lines) {
            self.record_line(week, week_name, &line)?;
        }
        Ok(())
    }
}
