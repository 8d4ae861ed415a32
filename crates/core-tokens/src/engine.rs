//! The parser/emitter core: walks a markup string left to right, updates a
//! desired `StyleState`, and defers ANSI emission until a visible byte, a
//! newline, or a terminal control tag forces a sync.

use crate::color::Color;
use crate::stack::StyleStack;
use crate::style::{AttrFlags, StyleState};
use crate::tags;
use core_buffer::OutBuf;

/// Per-call context threaded through expansion rather than kept as process
/// globals, so tests can toggle either flag per call.
#[derive(Debug, Clone, Copy)]
pub struct ExpandOptions {
    pub colors_enabled: bool,
    pub expand_tokens: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            colors_enabled: true,
            expand_tokens: true,
        }
    }
}

/// Result of expanding one markup string.
#[derive(Debug, Clone)]
pub struct TokenExpansion {
    pub bytes: Vec<u8>,
    /// Visual (row, col), 1-indexed, recorded by a `{cursor}` tag, if any.
    pub cursor: Option<(u16, u16)>,
    pub final_row: u16,
    pub final_col: u16,
}

impl TokenExpansion {
    pub fn as_str(&self) -> &str {
        // The engine only ever appends bytes copied from a `&str` input or
        // ASCII escape sequences of its own construction, so this is always
        // valid UTF-8.
        std::str::from_utf8(&self.bytes).expect("expansion output is valid UTF-8")
    }
}

pub(crate) struct Engine<'o> {
    pub(crate) desired: StyleState,
    emitted: StyleState,
    dirty: bool,
    pub(crate) stack: StyleStack,
    out: OutBuf,
    visual_row: u16,
    visual_col: u16,
    cursor_mark: Option<(u16, u16)>,
    opts: &'o ExpandOptions,
}

impl<'o> Engine<'o> {
    fn new(opts: &'o ExpandOptions) -> Self {
        Self {
            desired: StyleState::default(),
            emitted: StyleState::default(),
            dirty: false,
            stack: StyleStack::new(),
            out: OutBuf::new(),
            visual_row: 1,
            visual_col: 1,
            cursor_mark: None,
            opts,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn push_fg(&mut self, new: Color) {
        self.stack.push_fg(self.desired.fg);
        self.desired.fg = new;
        self.mark_dirty();
    }

    pub(crate) fn push_bg(&mut self, new: Color) {
        self.stack.push_bg(self.desired.bg);
        self.desired.bg = new;
        self.mark_dirty();
    }

    pub(crate) fn push_attr(&mut self, bit: AttrFlags) {
        self.stack.push_attr(bit, self.desired.attrs.contains(bit));
        self.desired.attrs.insert(bit);
        self.mark_dirty();
    }

    pub(crate) fn push_composite(&mut self, count: u8) {
        self.stack.push_composite(count);
    }

    pub(crate) fn pop(&mut self) {
        self.stack.pop(&mut self.desired);
        self.mark_dirty();
    }

    pub(crate) fn reset(&mut self) {
        self.desired.reset();
        self.stack.clear();
        self.mark_dirty();
    }

    pub(crate) fn brighten_current_fg(&mut self) {
        self.stack.push_fg(self.desired.fg);
        self.desired.fg = match self.desired.fg {
            Color::Standard(code @ 30..=37) => Color::Standard(code + 60),
            _ => Color::Standard(97),
        };
        self.mark_dirty();
    }

    pub(crate) fn note_cursor(&mut self) {
        self.cursor_mark = Some((self.visual_row, self.visual_col));
    }

    /// Emits a raw control sequence (not SGR) after syncing pending style.
    /// Suppressed entirely when colors are disabled, matching the treatment
    /// of every other ANSI write.
    pub(crate) fn emit_control(&mut self, seq: &str) {
        self.sync();
        if self.opts.colors_enabled {
            self.out.push_str(seq);
        }
    }

    pub(crate) fn emit_goto(&mut self, row: u32, col: u32) {
        self.sync();
        if self.opts.colors_enabled {
            self.out.push_str(&format!("\x1b[{row};{col}H"));
        }
    }

    pub(crate) fn emit_goto_cursor(&mut self) {
        if let Some((row, col)) = self.cursor_mark {
            self.emit_goto(row as u32, col as u32);
        }
    }

    fn emit_visible_byte(&mut self, b: u8) {
        self.sync();
        self.out.push_byte(b);
        self.visual_col += 1;
    }

    fn emit_visible_bytes(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.sync();
        for &b in bytes {
            self.out.push_byte(b);
        }
        self.visual_col += bytes.len() as u16;
    }

    fn newline(&mut self) {
        self.reset_line_styles();
        self.out.push_byte(b'\n');
        self.visual_row += 1;
        self.visual_col = 1;
    }

    fn emit_opaque(&mut self, bytes: &[u8]) {
        // Pre-existing CSI sequences from the caller bypass the style model
        // entirely: they are copied verbatim and never move the tracked
        // visual column, since tracking reflects emitted text, not terminal
        // state.
        self.sync();
        for &b in bytes {
            self.out.push_byte(b);
        }
    }

    /// Synchronizes emitted state to desired state, choosing the additive or
    /// full-reset strategy, then marks clean.
    fn sync(&mut self) {
        if !self.dirty {
            return;
        }
        if self.opts.colors_enabled {
            let need_reset = self.needs_full_reset();
            if need_reset {
                self.emit_full_reset();
            } else {
                self.emit_additive();
            }
        }
        self.emitted = self.desired;
        self.dirty = false;
    }

    fn needs_full_reset(&self) -> bool {
        let turning_off = AttrFlags::ORDER
            .iter()
            .any(|&(bit, _)| self.emitted.attrs.contains(bit) && !self.desired.attrs.contains(bit));
        let fg_to_default = !self.emitted.fg.is_default() && self.desired.fg.is_default();
        let bg_to_default = !self.emitted.bg.is_default() && self.desired.bg.is_default();
        turning_off || fg_to_default || bg_to_default
    }

    fn emit_full_reset(&mut self) {
        let mut params = String::from("0");
        for &(bit, code) in AttrFlags::ORDER {
            if self.desired.attrs.contains(bit) {
                params.push(';');
                params.push_str(code);
            }
        }
        push_color_param(&mut params, self.desired.fg, true);
        push_color_param(&mut params, self.desired.bg, false);
        self.out.push_str("\x1b[");
        self.out.push_str(&params);
        self.out.push_str("m");
    }

    fn emit_additive(&mut self) {
        let mut params = String::new();
        for &(bit, code) in AttrFlags::ORDER {
            if self.desired.attrs.contains(bit) && !self.emitted.attrs.contains(bit) {
                push_sep(&mut params);
                params.push_str(code);
            }
        }
        if self.desired.fg != self.emitted.fg && !self.desired.fg.is_default() {
            push_sep(&mut params);
            push_color_code(&mut params, self.desired.fg, true);
        }
        if self.desired.bg != self.emitted.bg && !self.desired.bg.is_default() {
            push_sep(&mut params);
            push_color_code(&mut params, self.desired.bg, false);
        }
        if !params.is_empty() {
            self.out.push_str("\x1b[");
            self.out.push_str(&params);
            self.out.push_str("m");
        }
    }

    /// Terminates any active emitted styling before a newline and resets
    /// both desired and emitted state to defaults, leaving the restore
    /// stack intact so cross-line `{/}` keeps working.
    fn reset_line_styles(&mut self) {
        if !self.emitted.is_default() {
            if self.opts.colors_enabled {
                self.out.push_str("\x1b[0m");
            }
            self.emitted.reset();
        }
        self.desired.reset();
        self.dirty = false;
    }

    fn finish(mut self) -> TokenExpansion {
        // No trailing sync: a style left active at end-of-input is simply
        // never flushed, matching "deferred emission" — there's no more
        // visible output for it to precede.
        let _ = &mut self;
        TokenExpansion {
            bytes: self.out.into_vec(),
            cursor: self.cursor_mark,
            final_row: self.visual_row,
            final_col: self.visual_col,
        }
    }
}

fn push_sep(params: &mut String) {
    if !params.is_empty() {
        params.push(';');
    }
}

fn push_color_param(params: &mut String, color: Color, is_fg: bool) {
    if color.is_default() {
        return;
    }
    params.push(';');
    push_color_code(params, color, is_fg);
}

fn push_color_code(params: &mut String, color: Color, is_fg: bool) {
    match color {
        Color::Default => {}
        Color::Standard(code) => params.push_str(&code.to_string()),
        Color::Extended(n) => {
            params.push_str(if is_fg { "38;5;" } else { "48;5;" });
            params.push_str(&n.to_string());
        }
    }
}

/// Finds the end (exclusive) of a CSI run starting at `bytes[start]`, which
/// must be ESC. Accepts `ESC [ <any bytes> <A-Za-z>`, the "sufficient"
/// passthrough classification: a bare ESC with no matching final letter
/// within a short lookahead is not treated as an opaque run.
fn match_csi(bytes: &[u8], start: usize) -> Option<usize> {
    const LOOKAHEAD: usize = 64;
    if bytes.get(start) != Some(&0x1B) || bytes.get(start + 1) != Some(&b'[') {
        return None;
    }
    let mut i = start + 2;
    let limit = bytes.len().min(start + LOOKAHEAD);
    while i < limit {
        let b = bytes[i];
        if b.is_ascii_alphabetic() {
            return Some(i + 1);
        }
        i += 1;
    }
    None
}

/// Finds a `{...}` tag starting at `input[start]` (which must be `{`).
/// Returns the end index (exclusive) and the raw content between the
/// braces. `None` means no closing brace was found — malformed input that
/// falls back to literal passthrough of just the `{` byte.
fn scan_tag(input: &str, start: usize) -> Option<(usize, &str)> {
    let rest = &input[start + 1..];
    let close = rest.find('}')?;
    let content = &rest[..close];
    Some((start + 1 + close + 1, content))
}

/// Splits tag content on the first `:` into (name, Some(arg)) or (name, None).
fn split_tag(content: &str) -> (&str, Option<&str>) {
    match content.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (content, None),
    }
}

/// Expands `input` per `opts`. Never panics; malformed markup degrades to
/// passthrough.
pub fn expand(input: &str, opts: &ExpandOptions) -> TokenExpansion {
    if !opts.expand_tokens {
        return TokenExpansion {
            bytes: input.as_bytes().to_vec(),
            cursor: None,
            final_row: 1,
            final_col: 1,
        };
    }

    let mut eng = Engine::new(opts);
    let bytes = input.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if b == 0x1B {
            if let Some(end) = match_csi(bytes, i) {
                eng.emit_opaque(&bytes[i..end]);
                i = end;
                continue;
            }
            eng.emit_visible_byte(b);
            i += 1;
            continue;
        }
        if b == b'{' {
            match scan_tag(input, i) {
                Some((end, content)) => {
                    let (name, arg) = split_tag(content);
                    if tags::dispatch(&mut eng, name, arg) {
                        i = end;
                    } else {
                        // Unknown tag: emitted verbatim as ordinary text.
                        eng.emit_visible_bytes(&bytes[i..end]);
                        i = end;
                    }
                    continue;
                }
                None => {
                    eng.emit_visible_byte(b);
                    i += 1;
                    continue;
                }
            }
        }
        if b == b'\n' {
            eng.newline();
            i += 1;
            continue;
        }
        eng.emit_visible_byte(b);
        i += 1;
    }

    eng.finish()
}
