// src/streak.rs
//
// Maximal runs of consecutive items satisfying a predicate. Callers supply
// items already in play order; nothing here sorts.

/// Every run of two or more consecutive items for which `pred` holds.
pub fn streaks<T, F>(items: &[T], pred: F) -> Vec<&[T]>
where
    F: Fn(&T) -> bool,
{
    let mut out = Vec::new();
    let mut start = None;

    for (i, item) in items.iter().enumerate() {
        match (pred(item), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                if i - s >= 2 {
                    out.push(&items[s..i]);
                }
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        if items.len() - s >= 2 {
            out.push(&items[s..]);
        }
    }
    out
}
