//! Where the picker's event loop gets its next logical key from.
//!
//! `CrosstermKeySource` reads the controlling tty. `ScriptedKeySource`
//! decodes the `--and-keys` test-hook string. `ChainedKeySource` drains a
//! scripted source first and falls through to a real one once it's
//! exhausted, which is how `--and-keys` is wired up: inject keystrokes,
//! then (if the picker is still running) read the tty as usual.

use crate::key::Key;
use std::collections::VecDeque;
use std::io;

pub trait KeySource {
    /// `Ok(None)` means this source is exhausted (not "no key available yet"
    /// — sources that can run out, like `ScriptedKeySource`, use this to
    /// signal a caller such as `ChainedKeySource` to fall through).
    fn next_key(&mut self) -> io::Result<Option<Key>>;
}

/// Reads key events from the controlling terminal via crossterm, which
/// already resolves `ESC [ A`-style CSI sequences into discrete arrow-key
/// events (including the bare-ESC-vs-arrow-prefix disambiguation spec.md's
/// Terminal I/O section describes) — no hand-rolled byte parsing needed.
pub struct CrosstermKeySource;

impl KeySource for CrosstermKeySource {
    fn next_key(&mut self) -> io::Result<Option<Key>> {
        use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

        loop {
            let event = read().map_err(io::Error::other)?;
            let Event::Key(ev) = event else { continue };
            if !matches!(ev.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            if ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c') {
                return Ok(Some(Key::CtrlC));
            }
            let mapped = match ev.code {
                KeyCode::Char(c) => Some(Key::Char(c)),
                KeyCode::Enter => Some(Key::Enter),
                KeyCode::Esc => Some(Key::Escape),
                KeyCode::Backspace => Some(Key::Backspace),
                KeyCode::Up => Some(Key::Up),
                KeyCode::Down => Some(Key::Down),
                KeyCode::Left => Some(Key::Left),
                KeyCode::Right => Some(Key::Right),
                _ => None,
            };
            if let Some(key) = mapped {
                return Ok(Some(key));
            }
            // Unrecognized key code (function keys, media keys, ...): ignored,
            // loop for the next event.
        }
    }
}

/// Decodes the `--and-keys` string into a queue of keys. Only the bytes a
/// shell could plausibly hand over on a command line are recognized: plain
/// ASCII printable characters, `\r`/`\n` for Enter, `\x7f`/`\x08` for
/// Backspace, `\x1b` for Escape, `\x03` for Ctrl-C. Anything else is
/// skipped rather than rejected, matching the token engine's "never fail"
/// posture for malformed input.
pub struct ScriptedKeySource {
    keys: VecDeque<Key>,
}

impl ScriptedKeySource {
    pub fn from_str(script: &str) -> Self {
        let mut keys = VecDeque::new();
        for &b in script.as_bytes() {
            let key = match b {
                b'\r' | b'\n' => Key::Enter,
                0x7f | 0x08 => Key::Backspace,
                0x1b => Key::Escape,
                0x03 => Key::CtrlC,
                0x20..=0x7e => Key::Char(b as char),
                _ => continue,
            };
            keys.push_back(key);
        }
        Self { keys }
    }
}

impl KeySource for ScriptedKeySource {
    fn next_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }
}

/// Drains `first` to exhaustion, then delegates every subsequent call to
/// `second`.
pub struct ChainedKeySource<A, B> {
    first: A,
    second: B,
    first_exhausted: bool,
}

impl<A: KeySource, B: KeySource> ChainedKeySource<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            first_exhausted: false,
        }
    }
}

impl<A: KeySource, B: KeySource> KeySource for ChainedKeySource<A, B> {
    fn next_key(&mut self) -> io::Result<Option<Key>> {
        if !self.first_exhausted {
            match self.first.next_key()? {
                Some(key) => return Ok(Some(key)),
                None => self.first_exhausted = true,
            }
        }
        self.second.next_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scripted_source_decodes_mixed_bytes() {
        let mut src = ScriptedKeySource::from_str("ab\x7f\r");
        assert_eq!(src.next_key().unwrap(), Some(Key::Char('a')));
        assert_eq!(src.next_key().unwrap(), Some(Key::Char('b')));
        assert_eq!(src.next_key().unwrap(), Some(Key::Backspace));
        assert_eq!(src.next_key().unwrap(), Some(Key::Enter));
        assert_eq!(src.next_key().unwrap(), None);
    }

    #[test]
    fn scripted_source_skips_unrecognized_bytes() {
        let mut src = ScriptedKeySource::from_str("a\x01b");
        assert_eq!(src.next_key().unwrap(), Some(Key::Char('a')));
        assert_eq!(src.next_key().unwrap(), Some(Key::Char('b')));
        assert_eq!(src.next_key().unwrap(), None);
    }

    struct Empty;
    impl KeySource for Empty {
        fn next_key(&mut self) -> io::Result<Option<Key>> {
            Ok(None)
        }
    }

    struct OneShot(Option<Key>);
    impl KeySource for OneShot {
        fn next_key(&mut self) -> io::Result<Option<Key>> {
            Ok(self.0.take())
        }
    }

    #[test]
    fn chained_source_falls_through_once_first_is_exhausted() {
        let mut chained = ChainedKeySource::new(
            ScriptedKeySource::from_str("x"),
            OneShot(Some(Key::Enter)),
        );
        assert_eq!(chained.next_key().unwrap(), Some(Key::Char('x')));
        assert_eq!(chained.next_key().unwrap(), Some(Key::Enter));
    }

    #[test]
    fn chained_source_with_empty_first_goes_straight_to_second() {
        let mut chained = ChainedKeySource::new(Empty, OneShot(Some(Key::Escape)));
        assert_eq!(chained.next_key().unwrap(), Some(Key::Escape));
    }
}
