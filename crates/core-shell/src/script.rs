//! Builds the shell-script text for an [`Action`].
//!
//! Paths are interpolated between single quotes with no escaping — a path
//! containing a single quote produces an invalid script. This is a
//! documented limitation rather than a bug: the scan only ever produces
//! `YYYY-MM-DD-`-prefixed ASCII names in practice.

use crate::action::Action;
use std::path::Path;

fn quote(s: &str) -> String {
    format!("'{s}'")
}

fn path_str(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

/// The script split into its non-`cd` work and the final `cd` target —
/// direct mode runs the former in a child shell and prints only a hint
/// line built from the latter.
pub struct ShellScript {
    pub preceding: String,
    pub cd_path: String,
}

impl ShellScript {
    pub fn build(action: &Action) -> Self {
        match action {
            Action::Cd(path) => {
                let p = path_str(path);
                Self {
                    preceding: format!("touch {}", quote(&p)),
                    cd_path: p,
                }
            }
            Action::Mkdir(path) => {
                let p = path_str(path);
                Self {
                    preceding: format!("mkdir -p {}", quote(&p)),
                    cd_path: p,
                }
            }
            Action::Clone { url, path } => {
                let p = path_str(path);
                Self {
                    preceding: format!("git clone {} {}", quote(url), quote(&p)),
                    cd_path: p,
                }
            }
        }
    }

    /// The full one-line script: `<preceding> && cd '<path>' && true`.
    pub fn full(&self) -> String {
        format!("{} && cd {} && true", self.preceding, quote(&self.cd_path))
    }

    /// The hint line direct mode prints after running `preceding` itself.
    pub fn cd_hint(&self) -> String {
        format!("cd {}", quote(&self.cd_path))
    }
}
