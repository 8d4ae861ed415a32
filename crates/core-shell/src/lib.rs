//! Translates a selector outcome into a shell script and delivers it to
//! the calling shell, either directly (run here, print a `cd` hint) or
//! for `eval` (print the whole script).

mod action;
mod dispatch;
mod script;

pub use action::{Action, Mode};
pub use dispatch::dispatch;
pub use script::ShellScript;
