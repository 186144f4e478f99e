// src/specs/season.rs
//
// Regular-season grid. Rows alternate: a header row of week labels
// ("Week 3 - Oct 2"), then a body row whose cells list that week's games.
// Columns are weeks, so one row pair covers several weeks.
use scraper::ElementRef;

use crate::config::reference::StructureRules;
use crate::core::sanitize::week_label;
use crate::core::tree::{children, children_named, grandchildren_named, own_text, table_rows, text};
use crate::error::{Error, Result};

use super::SeasonContext;

pub fn extract(table: ElementRef<'_>, ctx: &mut SeasonContext<'_>) -> Result<()> {
    let rows = table_rows(table)?;

    let mut start = 0;
    if ctx.reference.structure.has_special_games(ctx.year) {
        let first = rows
            .first()
            .ok_or_else(|| Error::Markup(s!("special games row missing")))?;
        logd!("{}: reading special games row", ctx.year);
        special_games(*first, ctx)?;
        start = 1;
    }

    for pair in rows[start..].chunks(2) {
        let [header_row, body_row] = pair else {
            return Err(Error::Markup(s!("week header row without a games row")));
        };
        let headers = children_named(*header_row, "td");
        let cells = children_named(*body_row, "td");

        for (j, cell) in cells.iter().enumerate() {
            let header = headers
                .get(j)
                .ok_or_else(|| Error::Markup(format!("games cell {j} has no week header")))?;
            let name = week_label(&text(*header));
            if name.is_empty() {
                continue; // bye column
            }

            let week = ctx.league.add_week(ctx.season, &name, false);
            let lines = cell_lines(*cell, ctx.year, &name, &ctx.reference.structure);
            ctx.record_lines(week, &name, lines)?;
        }
    }

    Ok(())
}

/// A single row where each cell is a flat list of `div`s: the week label
/// first, then one game per `div`.
fn special_games(row: ElementRef<'_>, ctx: &mut SeasonContext<'_>) -> Result<()> {
    for cell in children_named(row, "td") {
        let divs = children_named(cell, "div");
        let Some((label, games)) = divs.split_first() else { continue };

        let name = week_label(&text(*label));
        if name.is_empty() {
            // No nameless weeks, same as the header rows below.
            continue;
        }
        let week = ctx.league.add_week(ctx.season, &name, false);
        let lines = games.iter().map(|d| text(*d)).collect();
        ctx.record_lines(week, &name, lines)?;
    }
    Ok(())
}

/// Split one body cell into raw game lines.
pub fn cell_lines(cell: ElementRef<'_>, year: i32, week: &str, rules: &StructureRules) -> Vec<String> {
    let wrappers = children_named(cell, "div");
    match wrappers[..] {
        [wrapper] => single_wrapper(wrapper, year, week, rules).into_iter().map(text).collect(),
        [first, second] => uneven_wrappers(first, second),
        _ => wrappers.iter().map(|w| text(*w)).collect(),
    }
}

/// One `div` around the whole cell. What sits inside it depends on the year.
fn single_wrapper<'a>(
    wrapper: ElementRef<'a>,
    year: i32,
    week: &str,
    rules: &StructureRules,
) -> Vec<ElementRef<'a>> {
    let kids = children(wrapper);

    if kids.iter().all(|k| k.value().name() == "font") {
        // <div><font><div>game</div>…</font>…</div>
        grandchildren_named(&kids, "div")
    } else if kids.len() == 1 && rules.is_deep_nested(year, week) {
        logd!("{year} {week}: deep nested cell");
        let inner = grandchildren_named(&children_named(wrapper, "div"), "div");
        grandchildren_named(&inner, "div")
    } else if kids.len() == 1 {
        grandchildren_named(&children_named(wrapper, "font"), "div")
    } else if kids.len() == 4 {
        // Four blocks, games one level down in each: hoist them.
        grandchildren_named(&kids, "div")
    } else {
        children_named(wrapper, "div")
    }
}

/// Two sibling wrappers: the second holds `font > div` games plus one game
/// as bare trailing text; the first is a game by itself.
fn uneven_wrappers(first: ElementRef<'_>, second: ElementRef<'_>) -> Vec<String> {
    let mut lines: Vec<String> = grandchildren_named(&children_named(second, "font"), "div")
        .into_iter()
        .map(text)
        .collect();
    lines.push(text(first));
    lines.push(own_text(second));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::{parse_fragment, table_root};

    fn lines_of(cell_html: &str, year: i32, week: &str, rules: &StructureRules) -> Vec<String> {
        let markup = format!("<table ><tr><td>{week}</td></tr><tr>{cell_html}</tr></table>");
        let doc = parse_fragment(&markup);
        let table = table_root(&doc).unwrap();
        let rows = table_rows(table).unwrap();
        let cell = children_named(rows[1], "td")[0];
        cell_lines(cell, year, week, rules)
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn flat_divs() {
        let got = lines_of("<td><div>A 1, B 2</div><div>C 3, D 4</div><div>E 5, F 6</div></td>", 2000, "Week 1", &StructureRules::default());
        assert_eq!(got, vec!["A 1, B 2", "C 3, D 4", "E 5, F 6"]);
    }

    #[test]
    fn font_children_are_unwrapped() {
        let got = lines_of(
            "<td><div><font><div>A 1, B 2</div><div>C 3, D 4</div></font><font><div>E 5, F 6</div></font></div></td>",
            2005, "Week 2", &StructureRules::default(),
        );
        assert_eq!(got, vec!["A 1, B 2", "C 3, D 4", "E 5, F 6"]);
    }

    #[test]
    fn four_blocks_are_hoisted() {
        let got = lines_of(
            "<td><div><span><div>A 1, B 2</div></span><span><div>C 3, D 4</div></span><span><div>E 5, F 6</div></span><span></span></div></td>",
            2012, "Week 5", &StructureRules::default(),
        );
        assert_eq!(got, vec!["A 1, B 2", "C 3, D 4", "E 5, F 6"]);
    }

    #[test]
    fn single_non_font_child_reads_font_games() {
        let got = lines_of(
            "<td><div><span>note</span></div></td>",
            2013, "Week 5", &StructureRules::default(),
        );
        assert!(got.is_empty());
    }

    #[test]
    fn deep_nesting_only_for_listed_week() {
        let rules = StructureRules {
            deep_nested_weeks: vec![crate::config::reference::WeekKey { year: 2019, week: s!("Week 8") }],
            ..StructureRules::default()
        };
        let cell = "<td><div><div><div><div>A 1, B 2</div><div>C 3, D 4</div></div></div></div></td>";
        assert_eq!(lines_of(cell, 2019, "Week 8", &rules), vec!["A 1, B 2", "C 3, D 4"]);
        assert!(lines_of(cell, 2019, "Week 9", &rules).is_empty());
    }

    #[test]
    fn uneven_wrappers_rebuild_trailing_text() {
        let got = lines_of(
            "<td><div>A 1, B 2</div><div><font><div>C 3, D 4</div></font>E 5, F 6</div></td>",
            2009, "Week 7", &StructureRules::default(),
        );
        assert_eq!(got, vec!["C 3, D 4", "A 1, B 2", "E 5, F 6"]);
    }
}
