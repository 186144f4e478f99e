// src/core/sanitize.rs

/// Undo the encoding damage the archived pages carry: `&nbsp;` entities and
/// raw U+00A0 become plain spaces, stray `Â` bytes left over from a
/// Latin-1/UTF-8 round trip are dropped. Nothing else is touched; run it once
/// on each located table before building a tree from it.
pub fn normalize_markup(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace('Â', "")
        .replace('\u{a0}', " ")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Week label from a regular-season header cell: text before the first
/// hyphen ("Week 3 - Oct 2" → "Week 3"). Empty for bye placeholders.
pub fn week_label(header: &str) -> String {
    let head = header.split('-').next().unwrap_or("");
    normalize_ws(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nbsp_forms_become_spaces() {
        assert_eq!(normalize_markup("Team&nbsp;Bean\u{a0}441"), "Team Bean 441");
    }

    #[test]
    fn mojibake_is_stripped() {
        assert_eq!(normalize_markup("WolvesÂ 846"), "Wolves 846");
    }

    #[test]
    fn other_entities_are_left_alone() {
        assert_eq!(normalize_markup("A &amp; B"), "A &amp; B");
    }

    #[test]
    fn week_label_cuts_at_hyphen() {
        assert_eq!(week_label("  Week 3 - Oct 2 "), "Week 3");
        assert_eq!(week_label("Week\n 12"), "Week 12");
        assert_eq!(week_label(" - "), "");
    }
}
