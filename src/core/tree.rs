// src/core/tree.rs
//
// Element-tree access for a located table. Everything here looks at direct
// children only; the standings markup nests differently by year, so callers
// decide how deep to walk.
use scraper::{ElementRef, Html};

use crate::error::{Error, Result};

/// Parse a located table fragment and hand back the document that owns it.
pub fn parse_fragment(markup: &str) -> Html {
    Html::parse_fragment(markup)
}

/// The first `<table>` element in a parsed fragment.
pub fn table_root(doc: &Html) -> Result<ElementRef<'_>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "table")
        .ok_or_else(|| Error::Markup(s!("fragment holds no <table>")))
}

/// `table > tbody > tr`, in document order.
pub fn table_rows<'a>(table: ElementRef<'a>) -> Result<Vec<ElementRef<'a>>> {
    let tbody = children_named(table, "tbody")
        .into_iter()
        .next()
        .ok_or_else(|| Error::Markup(s!("table has no <tbody>")))?;
    Ok(children_named(tbody, "tr"))
}

/// All child elements, skipping text and comments.
pub fn children(el: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// Child elements with the given tag name.
pub fn children_named<'a>(el: ElementRef<'a>, name: &str) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == name)
        .collect()
}

/// Child elements named `name` of every element in `els`, flattened in order.
pub fn grandchildren_named<'a>(els: &[ElementRef<'a>], name: &str) -> Vec<ElementRef<'a>> {
    els.iter().flat_map(|e| children_named(*e, name)).collect()
}

/// Concatenated text of every descendant text node.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Concatenated text of direct text children only; nested elements are skipped.
pub fn own_text(el: ElementRef<'_>) -> String {
    el.children()
        .filter_map(|n| n.value().as_text().map(|t| t.to_string()))
        .collect()
}
