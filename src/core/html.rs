// src/core/html.rs
//
// Raw-text scanning over page markup, before any tree is built.
use crate::error::{Error, Result};

const TABLE_OPEN: &str = "<table ";
const TABLE_CLOSE: &str = "</table>";

/// Locate the table holding one of `keywords`.
///
/// Keywords are tried in order and the first one present anywhere in the page
/// anchors the search. From the anchor we widen to the nearest `<table ` before
/// it and the first `</table>` after that opener; the returned slice includes
/// both markers. Positional table indices drift from year to year, a week label
/// does not.
pub fn locate_table<'a>(raw: &'a str, keywords: &[&str]) -> Result<&'a str> {
    let not_found = || Error::TableNotFound {
        keywords: keywords.iter().map(|k| s!(*k)).collect(),
    };

    let anchor = keywords
        .iter()
        .find_map(|k| raw.find(k))
        .ok_or_else(not_found)?;

    // ASCII lowercasing leaves every byte offset valid against `raw`.
    let lower = raw.to_ascii_lowercase();
    let start = lower[..anchor].rfind(TABLE_OPEN).ok_or_else(not_found)?;
    let end = lower[start..]
        .find(TABLE_CLOSE)
        .map(|i| start + i + TABLE_CLOSE.len())
        .ok_or_else(not_found)?;

    Ok(&raw[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <table class="nav"><tr><td>Home</td></tr></table>
        <TABLE border=1><tbody><tr><td>Week 1 - Sep 5</td></tr></tbody></TABLE>
        <table class="post"><tr><td>Wild Card</td><td>Semi-Finals</td></tr></table>
        </body></html>"#;

    #[test]
    fn widens_from_anchor_to_enclosing_table() {
        let t = locate_table(PAGE, &["Week 1"]).unwrap();
        assert!(t.starts_with("<TABLE border=1>"));
        assert!(t.ends_with("</TABLE>"));
        assert!(t.contains("Week 1 - Sep 5"));
        assert!(!t.contains("Home"));
    }

    #[test]
    fn keyword_order_wins_over_position() {
        // "Wild Card Week" is absent, so "Wild Card" anchors even though
        // "Semi-Finals" sits in the same table.
        let t = locate_table(PAGE, &["Wild Card Week", "Wild Card", "Semi-Finals"]).unwrap();
        assert!(t.starts_with(r#"<table class="post">"#));
    }

    #[test]
    fn missing_keywords_is_table_not_found() {
        let err = locate_table(PAGE, &["Fantasy Bowl"]).unwrap_err();
        assert!(matches!(err, Error::TableNotFound { .. }));
    }

    #[test]
    fn anchor_outside_any_table_is_table_not_found() {
        let err = locate_table("Week 1 appears before any markup", &["Week 1"]).unwrap_err();
        assert!(matches!(err, Error::TableNotFound { .. }));
    }

    #[test]
    fn non_ascii_before_the_table_keeps_offsets() {
        let page = "Â Standings Â <TaBle id=x><tr><td>Week 1 Â</td></tr></TABLE> Â";
        let t = locate_table(page, &["Week 1"]).unwrap();
        assert_eq!(t, "<TaBle id=x><tr><td>Week 1 Â</td></tr></TABLE>");
    }
}
