//! `StyleStack`: bounded stack of restore records backing `{/}`.
//!
//! Every push by a semantic token is matched by exactly one pop record; a
//! composite record groups the N single-attribute pushes a semantic token
//! (like `{h1}`) makes so they pop atomically in one `{/}`. The stack is
//! capped at 32 entries — deeper pushes are silently dropped, and the
//! matching pop becomes a no-op, rather than failing the expansion.

use crate::color::Color;
use crate::style::{AttrFlags, StyleState};

pub const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy)]
enum Restore {
    Fg(Color),
    Bg(Color),
    AttrBit { bit: AttrFlags, was_set: bool },
}

impl Restore {
    fn apply(self, state: &mut StyleState) {
        match self {
            Restore::Fg(c) => state.fg = c,
            Restore::Bg(c) => state.bg = c,
            Restore::AttrBit { bit, was_set } => state.attrs.set(bit, was_set),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Single(Restore),
    /// Groups the `count` single entries immediately below it on the stack.
    Composite(u8),
}

#[derive(Debug)]
pub struct StyleStack {
    entries: [Option<Entry>; MAX_DEPTH],
    len: usize,
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleStack {
    pub fn new() -> Self {
        Self {
            entries: [None; MAX_DEPTH],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push_raw(&mut self, entry: Entry) {
        if self.len < MAX_DEPTH {
            self.entries[self.len] = Some(entry);
            self.len += 1;
        }
        // Overflow: silently dropped. The matching pop sees one fewer entry
        // and becomes a no-op for the attribute that never got recorded.
    }

    pub fn push_fg(&mut self, prev: Color) {
        self.push_raw(Entry::Single(Restore::Fg(prev)));
    }

    pub fn push_bg(&mut self, prev: Color) {
        self.push_raw(Entry::Single(Restore::Bg(prev)));
    }

    pub fn push_attr(&mut self, bit: AttrFlags, was_set: bool) {
        self.push_raw(Entry::Single(Restore::AttrBit { bit, was_set }));
    }

    /// Marks the `count` most recently pushed single entries as one atomic
    /// group, so a single `{/}` restores all of them.
    pub fn push_composite(&mut self, count: u8) {
        self.push_raw(Entry::Composite(count));
    }

    /// Pops one record and applies its restore(s) to `state`. A pop against
    /// an empty stack is a no-op.
    pub fn pop(&mut self, state: &mut StyleState) {
        if self.len == 0 {
            return;
        }
        self.len -= 1;
        match self.entries[self.len].take() {
            Some(Entry::Single(r)) => r.apply(state),
            Some(Entry::Composite(count)) => {
                for _ in 0..count {
                    if self.len == 0 {
                        break;
                    }
                    self.len -= 1;
                    if let Some(Entry::Single(r)) = self.entries[self.len].take() {
                        r.apply(state);
                    }
                }
            }
            None => {}
        }
    }

    pub fn clear(&mut self) {
        self.entries = [None; MAX_DEPTH];
        self.len = 0;
    }
}
