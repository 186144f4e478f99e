// src/specs/line.rs
//
// One game line: "<name> <score>, <name> <score>".
//
// Names may hold spaces and punctuation; the score is the run of digits at
// the very end of each half. Playoff lines may carry a "(#n)" seed before the
// name, which is dropped.

use crate::error::{Error, Result};

/// One side of a game as written on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Side {
    pub name: String,
    pub score: u32,
}

/// What a raw line looks like before any team is resolved.
#[derive(Debug, PartialEq, Eq)]
pub enum LineShape<'a> {
    /// Nothing but whitespace
    Blank,
    /// Two comma-separated halves
    TwoPart(&'a str, &'a str),
    /// No comma; a comma belongs right after the first digit run
    NeedsRepair(String),
    /// "A @ B", "A v B", "A v. B": a bye or cancelled game
    ByeMarker,
    Malformed,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParsedLine {
    Game(Side, Side),
    Skipped,
}

pub fn classify(line: &str) -> LineShape<'_> {
    if line.trim().is_empty() {
        return LineShape::Blank;
    }

    let parts: Vec<&str> = line.split(',').collect();
    if let [a, b] = parts[..] {
        return LineShape::TwoPart(a, b);
    }

    if line.contains('@') || line.contains(" v ") || line.contains(" v. ") {
        return LineShape::ByeMarker;
    }

    if parts.len() == 1 {
        if let Some(at) = end_of_first_digit_run(line) {
            if !line[at..].trim().is_empty() {
                let mut repaired = String::with_capacity(line.len() + 1);
                repaired.push_str(&line[..at]);
                repaired.push(',');
                repaired.push_str(&line[at..]);
                return LineShape::NeedsRepair(repaired);
            }
        }
    }

    LineShape::Malformed
}

/// Parse one line into its two sides, home first.
pub fn parse_line(line: &str) -> Result<ParsedLine> {
    match classify(line) {
        LineShape::TwoPart(home, away) => Ok(ParsedLine::Game(split_side(home)?, split_side(away)?)),
        LineShape::NeedsRepair(repaired) => {
            logd!("Repaired comma-less line {line:?} → {repaired:?}");
            parse_line(&repaired)
        }
        LineShape::Blank => Ok(ParsedLine::Skipped),
        LineShape::ByeMarker => {
            logd!("Skipping bye marker {line:?}");
            Ok(ParsedLine::Skipped)
        }
        LineShape::Malformed => Err(Error::MalformedGameLine { week: s!(), line: s!(line.trim()) }),
    }
}

/// Split "Team Name 123" (optionally "(#2) Team Name 123") into name and score.
pub fn split_side(half: &str) -> Result<Side> {
    let raw = half.trim();
    let unresolved = || Error::UnresolvedScoreFormat { text: s!(raw) };

    let name_start = if raw.starts_with("(#") {
        raw.find(char::is_whitespace).ok_or_else(unresolved)?
    } else {
        0
    };

    let digits = raw.bytes().rev().take_while(u8::is_ascii_digit).count();
    let score_start = raw.len() - digits;
    if digits == 0 || score_start < name_start {
        return Err(unresolved());
    }

    let name = raw[name_start..score_start].trim();
    if name.is_empty() {
        return Err(unresolved());
    }
    let score = raw[score_start..].parse::<u32>().map_err(|_| unresolved())?;

    Ok(Side { name: s!(name), score })
}

/// Byte offset just past the first run of ASCII digits.
fn end_of_first_digit_run(s: &str) -> Option<usize> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let len = s[start..].bytes().take_while(u8::is_ascii_digit).count();
    Some(start + len)
}
