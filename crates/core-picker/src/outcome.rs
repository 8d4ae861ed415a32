use std::path::PathBuf;

/// What the picker decided when the event loop exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// The user picked an existing entry.
    Cd(PathBuf),
    /// The user typed a filter and confirmed against the synthetic
    /// "create new" slot.
    Mkdir(PathBuf),
    /// Escape or Ctrl-C.
    Cancel,
}
