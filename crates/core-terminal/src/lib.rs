//! Raw-mode terminal I/O: entry/exit guard, window-size query, keystroke
//! decoding, and the frame writer the picker renders through.

mod key;
mod keysource;
mod raw_mode;
mod tty;

pub use key::Key;
pub use keysource::{ChainedKeySource, CrosstermKeySource, KeySource, ScriptedKeySource};
pub use raw_mode::RawModeGuard;
pub use tty::{Tty, window_size};
