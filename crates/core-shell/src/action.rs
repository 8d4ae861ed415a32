use std::path::PathBuf;

/// What the shell bridge is being asked to turn into a script. The union
/// of the picker's `SelectorOutcome` (`Cd`/`Mkdir`) plus the CLI's own
/// `clone`/URL-shorthand routing (`Clone`), which the picker itself never
/// produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Cd(PathBuf),
    Mkdir(PathBuf),
    Clone { url: String, path: PathBuf },
}

/// How the built script reaches the calling shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Execute the script's non-`cd` portion in a child shell here, then
    /// print just the `cd 'path'` line as a hint.
    Direct,
    /// Print the whole script to stdout, prefixed by a marker comment, for
    /// the shell-integration wrapper function to `eval`.
    Exec,
}
