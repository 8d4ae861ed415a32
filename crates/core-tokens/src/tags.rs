//! Maps tag names (and their optional `:arg`) to engine operations.
//!
//! Returns `true` when the name was recognized and acted on; `false` tells
//! the caller to treat the whole `{...}` run as ordinary text.

use crate::color::{self, Color};
use crate::engine::Engine;
use crate::style::AttrFlags;

pub(crate) fn dispatch(eng: &mut Engine, name: &str, arg: Option<&str>) -> bool {
    match (name, arg) {
        // --- pop: {/} and {/name} both just pop one record -----------------
        ("/", _) => {
            eng.pop();
            true
        }

        // --- primitive attributes -------------------------------------------
        ("b" | "bold", None) => {
            eng.push_attr(AttrFlags::BOLD);
            true
        }
        ("i" | "italic", None) => {
            eng.push_attr(AttrFlags::ITALIC);
            true
        }
        ("u" | "underline", None) => {
            eng.push_attr(AttrFlags::UNDERLINE);
            true
        }
        ("reverse", None) => {
            eng.push_attr(AttrFlags::REVERSE);
            true
        }
        ("strike" | "strikethrough", None) => {
            eng.push_attr(AttrFlags::STRIKETHROUGH);
            true
        }

        // --- {bright} alone: brighten whatever fg is already active --------
        ("bright", None) => {
            eng.brighten_current_fg();
            true
        }
        ("bright", Some(color_name)) => match color::standard_fg_code(color_name) {
            Some(code) => {
                eng.push_fg(Color::Standard(code + 60));
                true
            }
            None => false,
        },

        // --- extended palette: {fg:N} / {bg:N} ------------------------------
        ("fg", Some(n)) if n.chars().all(|c| c.is_ascii_digit()) => match n.parse::<u8>() {
            Ok(idx) => {
                eng.push_fg(Color::Extended(idx));
                true
            }
            Err(_) => false,
        },
        ("bg", Some(n)) if n.chars().all(|c| c.is_ascii_digit()) => match n.parse::<u8>() {
            Ok(idx) => {
                eng.push_bg(Color::Extended(idx));
                true
            }
            Err(_) => false,
        },

        // --- standard color names: {name} sets fg, {bg:name} sets bg --------
        (plain, None) if color::standard_fg_code(plain).is_some() => {
            let code = color::standard_fg_code(plain).unwrap();
            eng.push_fg(Color::Standard(code));
            true
        }
        ("bg", Some(color_name)) => match color::standard_fg_code(color_name) {
            Some(code) => {
                eng.push_bg(Color::Standard(code + 10));
                true
            }
            None => false,
        },

        _ => dispatch_semantic(eng, name, arg),
    }
}

fn dispatch_semantic(eng: &mut Engine, name: &str, arg: Option<&str>) -> bool {
    match (name, arg) {
        // --- semantic composites: each pushes several records, then one
        // composite marker so `{/}` unwinds them together --------------------
        ("h1", None) => {
            push_semantic(eng, |e| {
                e.push_attr(AttrFlags::BOLD);
                e.push_fg(Color::Extended(214));
            });
            true
        }
        ("h2", None) => {
            push_semantic(eng, |e| {
                e.push_attr(AttrFlags::BOLD);
                e.push_fg(Color::Standard(34));
            });
            true
        }
        ("h3" | "h4" | "h5" | "h6", None) => {
            push_semantic(eng, |e| {
                e.push_attr(AttrFlags::BOLD);
                e.push_fg(Color::Standard(37));
            });
            true
        }
        ("highlight", None) => {
            push_semantic(eng, |e| {
                e.push_attr(AttrFlags::BOLD);
                e.push_fg(Color::Standard(33));
            });
            true
        }
        ("strong", None) => {
            eng.push_attr(AttrFlags::BOLD);
            true
        }
        // Recolors fg to white; deliberately not the real SGR-2 faint
        // attribute — see style::AttrFlags::DIM's doc comment.
        ("dim", None) => {
            eng.push_fg(Color::Standard(37));
            true
        }
        ("dark", None) => {
            eng.push_fg(Color::Extended(245));
            true
        }
        ("section", None) => {
            push_semantic(eng, |e| {
                e.push_attr(AttrFlags::BOLD);
                e.push_bg(Color::Extended(237));
            });
            true
        }
        ("danger", None) => {
            eng.push_bg(Color::Extended(52));
            true
        }

        // --- reset / text (alias for a full reset) --------------------------
        ("reset", None) => {
            eng.reset();
            true
        }
        ("text", None) => {
            eng.reset();
            true
        }

        // --- cursor tracking and terminal controls --------------------------
        ("cursor", None) => {
            eng.note_cursor();
            true
        }
        ("clr", None) => {
            eng.emit_control("\x1b[K");
            true
        }
        ("cls", None) => {
            eng.emit_control("\x1b[J");
            true
        }
        ("home", None) => {
            eng.emit_control("\x1b[H");
            true
        }
        ("hide", None) => {
            eng.emit_control("\x1b[?25l");
            true
        }
        ("show", None) => {
            eng.emit_control("\x1b[?25h");
            true
        }
        ("goto_cursor", None) => {
            eng.emit_goto_cursor();
            true
        }
        ("goto", Some(coords)) => match parse_goto(coords) {
            Some((row, col)) => {
                eng.emit_goto(row, col);
                true
            }
            None => false,
        },

        _ => false,
    }
}

/// Runs `body`, which must make exactly as many single pushes as it claims,
/// then marks them as one composite so a single `{/}` restores all of them.
fn push_semantic(eng: &mut Engine, body: impl FnOnce(&mut Engine)) {
    let before = eng.stack.len();
    body(eng);
    let count = (eng.stack.len() - before) as u8;
    eng.push_composite(count);
}

fn parse_goto(coords: &str) -> Option<(u32, u32)> {
    let (row, col) = coords.split_once(',')?;
    let row: u32 = row.trim().parse().ok()?;
    let col: u32 = col.trim().parse().ok()?;
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{expand, ExpandOptions};
    use pretty_assertions::assert_eq;

    fn expand_default(input: &str) -> String {
        expand(input, &ExpandOptions::default()).as_str().to_string()
    }

    #[test]
    fn bold_then_pop_emits_sgr1_then_full_reset() {
        let out = expand_default("{b}x{/}y");
        assert_eq!(out, "\x1b[1mx\x1b[0my");
    }

    #[test]
    fn unknown_tag_passes_through_verbatim() {
        let out = expand_default("{not_a_tag}hi");
        assert_eq!(out, "{not_a_tag}hi");
    }

    #[test]
    fn semantic_h1_pops_atomically() {
        let out = expand_default("{h1}X{/}Y");
        assert_eq!(out, "\x1b[1;38;5;214mX\x1b[0mY");
    }

    #[test]
    fn dim_applied_repeatedly_emits_sgr_once() {
        // additive sync only emits when desired differs from already-emitted
        let out = expand_default("{dim}{dim}{dim}b");
        assert_eq!(out, "\x1b[37mb");
    }

    #[test]
    fn goto_emits_cup_sequence() {
        let out = expand_default("{goto:3,5}");
        assert_eq!(out, "\x1b[3;5H");
    }

    #[test]
    fn malformed_goto_arg_passes_through() {
        let out = expand_default("{goto:nope}");
        assert_eq!(out, "{goto:nope}");
    }
}
