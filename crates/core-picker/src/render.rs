//! Assembles one frame of markup text for the token engine to expand.
//!
//! Everything here produces `{tag}`-decorated `String`s; no ANSI is
//! written directly — `Picker::render` hands the whole frame to
//! `core_tokens::expand` once per draw.

use core_scan::{TryEntry, format_relative_time, has_date_prefix, highlight};
use std::time::SystemTime;

const HEADER: &str = "{h1}\u{1F4C1} Try Directory Selection{/}";
const FOOTER: &str = "{dim}\u{2191}\u{2193} move  Enter select  Backspace edit  Esc cancel{/}";

pub struct Frame {
    pub rows: u16,
    pub cols: u16,
}

impl Frame {
    pub fn list_height(&self) -> usize {
        (self.rows as usize).saturating_sub(8).max(1)
    }
}

/// Plain (tag-free) length of a line's content, used to right-align the
/// metadata column without counting markup bytes.
fn plain_len(prefix_cols: usize, name: &str) -> usize {
    prefix_cols + name.chars().count()
}

fn pad_to(cols: u16, left_len: usize, right: &str) -> String {
    let cols = cols as usize;
    let right_len = right.chars().count();
    if left_len + right_len + 1 > cols {
        return String::new();
    }
    let pad = cols - left_len - right_len;
    format!("{}{}", " ".repeat(pad), right)
}

fn render_entry_row(
    entry: &TryEntry,
    selected: bool,
    filter: &str,
    cols: u16,
    now: SystemTime,
) -> String {
    let marker = if selected { "{reverse}\u{25b8} " } else { "  " };
    let marker_cols = 2;

    let body = if has_date_prefix(&entry.name) && entry.name.len() >= 11 {
        let date_part = &entry.name[0..10];
        let rest = &entry.name[11..];
        let name_body = if filter.is_empty() {
            rest.to_string()
        } else {
            highlight(rest, filter)
        };
        format!("{{dark}}{date_part}-{{/}}{name_body}")
    } else if filter.is_empty() {
        entry.name.clone()
    } else {
        highlight(&entry.name, filter)
    };

    let meta = format!(
        "{}, {:.1}",
        format_relative_time(entry.mtime, now),
        entry.score
    );
    let left_plain = plain_len(marker_cols, &entry.name);
    let right = pad_to(cols, left_plain, &meta);

    let mut line = format!("{marker}{body}{right}");
    if selected {
        line.push_str("{/}");
    }
    line.push_str("{clr}\r\n");
    line
}

fn render_create_new_row(filter: &str, selected: bool, _cols: u16) -> String {
    let marker = if selected { "{reverse}\u{25b8} " } else { "  " };
    let label = format!("{{dim}}Create new:{{/}} {filter}");

    let mut line = format!("{marker}{label}");
    if selected {
        line.push_str("{/}");
    }
    line.push_str("{clr}\r\n");
    line
}

/// Builds the full-frame markup: header, search bar, the visible slice of
/// the list (offset by `scroll`, `height` rows tall), and a footer — in
/// the order the rendering contract describes.
#[allow(clippy::too_many_arguments)]
pub fn render_frame(
    entries: &[TryEntry],
    view: &[usize],
    filter: &str,
    selected: usize,
    scroll: usize,
    frame: &Frame,
    now: SystemTime,
) -> String {
    let create_new_offered = !filter.is_empty();
    let total_rows = view.len() + usize::from(create_new_offered);
    let height = frame.list_height();

    let mut out = String::new();
    out.push_str("{home}");
    out.push_str(HEADER);
    out.push_str("{clr}\r\n");
    out.push_str("{highlight}Search:{/} ");
    out.push_str(filter);
    out.push_str("{clr}\r\n");

    let end = (scroll + height).min(total_rows);
    for i in scroll..end {
        let is_selected = i == selected;
        if i < view.len() {
            out.push_str(&render_entry_row(
                &entries[view[i]],
                is_selected,
                filter,
                frame.cols,
                now,
            ));
        } else {
            out.push_str(&render_create_new_row(filter, is_selected, frame.cols));
        }
    }

    out.push_str("{cls}");
    out.push_str(FOOTER);
    out.push_str("{clr}");

    out
}
