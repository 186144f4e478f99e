// src/specs/postseason.rs
//
// Playoff bracket. Same header/body row pairing as the regular season, but
// each cell is a flat list of games, labels are used whole ("Wild Card
// Week", "Fantasy Bowl XXVII") and lines may carry conference prefixes,
// seeds or an MVP note.
use scraper::ElementRef;

use crate::config::reference::ReferenceData;
use crate::core::sanitize::normalize_ws;
use crate::core::tree::{children_named, table_rows, text};
use crate::error::{Error, Result};

use super::SeasonContext;

pub fn extract(table: ElementRef<'_>, ctx: &mut SeasonContext<'_>) -> Result<()> {
    let mut rows = table_rows(table)?;
    if ctx.reference.structure.drops_trailing_row(ctx.year, rows.len()) {
        logd!("{}: dropping trailing playoff row", ctx.year);
        rows.pop();
    }

    for pair in rows.chunks(2) {
        let [header_row, body_row] = pair else {
            return Err(Error::Markup(s!("playoff header row without a games row")));
        };
        let mut headers = children_named(*header_row, "td");
        if headers.is_empty() {
            headers = children_named(*header_row, "th");
        }
        let cells = children_named(*body_row, "td");

        for (j, cell) in cells.iter().enumerate() {
            let header = headers
                .get(j)
                .ok_or_else(|| Error::Markup(format!("playoff cell {j} has no round header")))?;
            let name = normalize_ws(&text(*header));
            if name.is_empty() {
                continue;
            }

            let week = ctx.league.add_week(ctx.season, &name, true);
            let lines = cell_lines(*cell, ctx.year, &name, ctx.reference);
            ctx.record_lines(week, &name, lines)?;
        }
    }

    Ok(())
}

/// Game lines of one playoff cell, cleaned of conference prefixes and notes.
pub fn cell_lines(cell: ElementRef<'_>, year: i32, week: &str, reference: &ReferenceData) -> Vec<String> {
    let divs = children_named(cell, "div");

    let raw: Vec<String> = if !divs.is_empty() {
        divs.into_iter().map(text).collect()
    } else if !reference.structure.uses_playoff_fallback(year) {
        Vec::new()
    } else if let Some(line) = reference.fallback_for(week) {
        // Recent championship cells are bare text with the result inline.
        logd!("{year} {week}: using fallback line");
        vec![s!(line)]
    } else {
        children_named(cell, "font").into_iter().map(text).collect()
    };

    raw.iter().filter_map(|l| clean_line(l)).collect()
}

/// Drop a conference prefix; blank lines and MVP notes yield nothing.
pub fn clean_line(line: &str) -> Option<String> {
    let line = line.trim();
    let line = line
        .strip_prefix("AFC:")
        .or_else(|| line.strip_prefix("NFC:"))
        .unwrap_or(line)
        .trim();
    if line.is_empty() || line.starts_with("MVP:") {
        None
    } else {
        Some(s!(line))
    }
}
