//! Delivers a built [`ShellScript`] to the calling shell, either by
//! printing it whole for `eval` (exec mode) or by running its non-`cd`
//! work here and printing just a `cd` hint (direct mode).

use crate::action::Mode;
use crate::script::ShellScript;
use anyhow::{Context, Result};
use std::io::Write;
use std::process::Command;

/// Leading comment on exec-mode output, so the shell-integration wrapper
/// function can recognize the line that follows is meant to be `eval`'d.
const EXEC_MARKER: &str = "# try:eval";

/// Runs `script` under `mode`, writing whatever the mode says goes to
/// stdout through `stdout` (a real `io::stdout()` in production, a
/// `Vec<u8>` in tests). Returns the process exit code.
pub fn dispatch(script: &ShellScript, mode: Mode, stdout: &mut impl Write) -> Result<i32> {
    match mode {
        Mode::Exec => {
            writeln!(stdout, "{EXEC_MARKER}")?;
            writeln!(stdout, "{}", script.full())?;
            Ok(0)
        }
        Mode::Direct => run_direct(script, stdout),
    }
}

fn shell_command() -> String {
    std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
}

fn run_direct(script: &ShellScript, stdout: &mut impl Write) -> Result<i32> {
    let shell = shell_command();
    let status = Command::new(&shell)
        .arg("-c")
        .arg(&script.preceding)
        .status()
        .with_context(|| format!("running child shell {shell} -c {:?}", script.preceding))?;

    if status.success() {
        writeln!(stdout, "{}", script.cd_hint())?;
    } else {
        tracing::debug!(code = ?status.code(), "direct_mode_child_shell_failed");
    }

    Ok(status.code().unwrap_or(1))
}
