//! Window-size query and the frame writer.
//!
//! Frames (and the cursor-hide/show/home control sequences the token engine
//! emits for them) are written to stderr, never stdout — stdout is reserved
//! for the shell-script outcome the dispatcher prints on exit.

use std::io::{self, Write};

/// Returns `(rows, cols)`, falling back to `(24, 80)` if the window size is
/// unreadable (not a tty, ioctl failure, etc).
pub fn window_size() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) => (rows, cols),
        Err(_) => (24, 80),
    }
}

/// Thin wrapper over stderr so the picker's render loop has one thing to
/// hand a frame's bytes to.
pub struct Tty {
    out: io::Stderr,
}

impl Default for Tty {
    fn default() -> Self {
        Self::new()
    }
}

impl Tty {
    pub fn new() -> Self {
        Self { out: io::stderr() }
    }

    pub fn write_frame(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.out.flush()
    }
}
