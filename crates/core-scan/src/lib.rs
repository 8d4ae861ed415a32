//! Tries-directory scan, fuzzy/recency scoring, and match highlighting.

mod entry;
mod score;
mod time;

pub use entry::{TryEntry, scan};
pub use score::{has_date_prefix, highlight, score};
pub use time::format_relative_time;
