//! Interactive picker: a raw-mode event loop over a tries-directory scan
//! with incremental fuzzy filtering, a scrolling viewport, and a
//! [`SelectorOutcome`] handed off to the shell bridge on exit.

mod filter;
mod outcome;
mod picker;
mod render;
mod view;

pub use filter::{MAX_FILTER_LEN, sanitize_for_dirname};
pub use outcome::SelectorOutcome;
pub use picker::Picker;
