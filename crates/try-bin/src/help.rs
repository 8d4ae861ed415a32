//! Help text and the `try init` shell-integration stub.
//!
//! Help is markup, not clap's generated text, so it renders through the
//! same `{h1}`/`{b}`/`{dim}` vocabulary as the rest of the tool — ported
//! from `print_help()` in `examples/original_source/src/main.c`. The
//! `worktree` line from the original's help is dropped: spec.md never
//! names `try worktree` as a supported command (see SPEC_FULL.md's
//! "Recovered from original_source" section), and advertising a command
//! that isn't wired up would be worse than silence.

use core_tokens::{ExpandOptions, expand};
use std::path::Path;

fn help_markup(default_path: &Path) -> String {
    format!(
        "{{h1}}try{{/}} v{version} - ephemeral workspace manager\n\n\
         {{h1}}To use try, add to your shell config:{{/}}\n\n\
         \u{0020}\u{0020}{{bright:blue}}# bash/zsh (~/.bashrc or ~/.zshrc){{/}}\n\
         \u{0020}\u{0020}eval \"$(try init ~/src/tries)\"\n\n\
         \u{0020}\u{0020}{{bright:blue}}# fish (~/.config/fish/config.fish){{/}}\n\
         \u{0020}\u{0020}eval (try init ~/src/tries | string collect)\n\n\
         {{h1}}Commands:{{/}}\n\
         \u{0020}\u{0020}{{b}}try{{/}} [query|url]      {{dim}}Interactive selector, or clone if URL{{/}}\n\
         \u{0020}\u{0020}{{b}}try clone{{/}} <url>      {{dim}}Clone repo into dated directory{{/}}\n\
         \u{0020}\u{0020}{{b}}try exec{{/}} [query]     {{dim}}Output shell script (for manual eval){{/}}\n\
         \u{0020}\u{0020}{{b}}try --help{{/}}           {{dim}}Show this help{{/}}\n\n\
         {{h1}}Defaults:{{/}}\n\
         \u{0020}\u{0020}Path: {{b}}~/src/tries{{/}} (override with {{b}}--path{{/}} on init)\n\
         \u{0020}\u{0020}Current: {{b}}{default_path}{{/}}\n\n\
         {{h1}}Examples:{{/}}\n\
         \u{0020}\u{0020}try clone https://github.com/user/repo.git       {{bright:blue}}# YYYY-MM-DD-user-repo{{/}}\n\
         \u{0020}\u{0020}try clone https://github.com/user/repo.git foo   {{bright:blue}}# YYYY-MM-DD-foo{{/}}\n\
         \u{0020}\u{0020}try https://github.com/user/repo.git             {{bright:blue}}# shorthand for clone{{/}}\n",
        version = env!("CARGO_PKG_VERSION"),
        default_path = default_path.display(),
    )
}

/// Prints help to stderr (matching the original's `fprintf(stderr, ...)` —
/// all UI output, including help, stays off stdout so scripting `try` for
/// its shell-script output is never polluted).
pub fn print(default_path: &Path, opts: &ExpandOptions) {
    let expansion = expand(&help_markup(default_path), opts);
    eprint!("{}", expansion.as_str());
}

pub fn print_version() {
    println!("try {}", env!("CARGO_PKG_VERSION"));
}

/// Which shell-function syntax `try init` should emit, chosen from the
/// `SHELL` environment variable's basename (spec.md §6: "bash/zsh detection
/// via `$SHELL` — fish variant for `fish`").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlavor {
    Fish,
    PosixLike,
}

impl ShellFlavor {
    pub fn detect(shell_env: Option<&str>) -> Self {
        match shell_env.and_then(|s| s.rsplit('/').next()) {
            Some(name) if name.contains("fish") => ShellFlavor::Fish,
            _ => ShellFlavor::PosixLike,
        }
    }
}

/// Builds the `try` wrapper shell function body for `try init [PATH]`: it
/// shells out to `try exec --path PATH "$@"`, capturing stdout only (stderr
/// — the picker's TTY frames and any "Cancelled." diagnostic — passes
/// through live), and `eval`s the captured script only on success.
pub fn init_script(flavor: ShellFlavor, path: &Path) -> String {
    let path = path.display();
    match flavor {
        ShellFlavor::PosixLike => format!(
            "try() {{\n\
            \u{0020} local output\n\
            \u{0020} output=\"$(command try exec --path '{path}' \"$@\")\"\n\
            \u{0020} local status=$?\n\
            \u{0020} if [ $status -eq 0 ]; then\n\
            \u{0020}   eval \"$output\"\n\
            \u{0020} else\n\
            \u{0020}   return $status\n\
            \u{0020} fi\n\
            }}\n"
        ),
        ShellFlavor::Fish => format!(
            "function try\n\
            \u{0020} set -l output (command try exec --path '{path}' $argv)\n\
            \u{0020} set -l status $status\n\
            \u{0020} if test $status -eq 0\n\
            \u{0020}   eval $output\n\
            \u{0020} else\n\
            \u{0020}   return $status\n\
            \u{0020} end\n\
            end\n"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn help_markup_expands_without_leftover_tags() {
        let expansion = expand(&help_markup(Path::new("/home/u/src/tries")), &ExpandOptions::default());
        let text = expansion.as_str();
        assert!(text.contains("ephemeral workspace manager"));
        assert!(!text.contains('{'));
    }

    #[test]
    fn shell_flavor_detects_fish_by_basename() {
        assert_eq!(ShellFlavor::detect(Some("/usr/bin/fish")), ShellFlavor::Fish);
        assert_eq!(ShellFlavor::detect(Some("/bin/zsh")), ShellFlavor::PosixLike);
        assert_eq!(ShellFlavor::detect(None), ShellFlavor::PosixLike);
    }

    #[test]
    fn init_script_posix_evals_captured_stdout() {
        let script = init_script(ShellFlavor::PosixLike, &PathBuf::from("/tries"));
        assert!(script.contains("try exec --path '/tries'"));
        assert!(script.contains("eval \"$output\""));
    }

    #[test]
    fn init_script_fish_uses_fish_syntax() {
        let script = init_script(ShellFlavor::Fish, &PathBuf::from("/tries"));
        assert!(script.contains("function try"));
        assert!(script.contains("set -l output"));
    }
}
