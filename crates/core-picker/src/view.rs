//! Filtering, scoring, sorting, and the viewport math that decides which
//! slice of the filtered view is on screen.

use core_scan::{TryEntry, score};
use std::cmp::Ordering;
use std::time::SystemTime;

/// Re-scores every entry against `filter`, then returns the indices (into
/// `entries`) that pass, sorted by score descending. Ties break by mtime
/// descending, then name ascending — the source leaves tie order
/// unspecified, so this is a deliberate, deterministic choice.
///
/// If `filter` is empty every entry passes (score is still computed, so
/// the date-prefix and recency bonuses still order the list). If `filter`
/// is non-empty only entries scoring above zero pass.
pub fn build_view(entries: &mut [TryEntry], filter: &str, now: SystemTime) -> Vec<usize> {
    for entry in entries.iter_mut() {
        entry.score = score(&entry.name, filter, entry.mtime, now);
    }

    let mut view: Vec<usize> = if filter.is_empty() {
        (0..entries.len()).collect()
    } else {
        (0..entries.len())
            .filter(|&i| entries[i].score > 0.0)
            .collect()
    };

    view.sort_by(|&a, &b| {
        let ea = &entries[a];
        let eb = &entries[b];
        eb.score
            .partial_cmp(&ea.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| eb.mtime.cmp(&ea.mtime))
            .then_with(|| ea.name.cmp(&eb.name))
    });

    view
}

/// Clamps a selected index into `[0, view_len]` if the synthetic "create
/// new" slot is offered (non-empty filter), or `[0, view_len - 1]`
/// otherwise (`0` if the view is empty).
pub fn clamp_selected(selected: usize, view_len: usize, create_new_offered: bool) -> usize {
    if create_new_offered {
        selected.min(view_len)
    } else if view_len == 0 {
        0
    } else {
        selected.min(view_len - 1)
    }
}

/// Adjusts `scroll` so `selected` stays within a `height`-row window:
/// scroll up if selection moved above it, down if it moved below it,
/// otherwise leave it alone.
pub fn adjust_scroll(scroll: usize, selected: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    if selected < scroll {
        selected
    } else if selected >= scroll + height {
        selected + 1 - height
    } else {
        scroll
    }
}
