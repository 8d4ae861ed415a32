//! Resolving and ensuring the tries root directory exists.
//!
//! `--path` overrides; otherwise the root is `$HOME/src/tries`, matching
//! `get_default_tries_path`/`DEFAULT_TRIES_PATH_SUFFIX` in
//! `examples/original_source/src/utils.c` and `config.h`.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

const DEFAULT_TRIES_PATH_SUFFIX: &str = "src/tries";

/// Resolves the tries root from an explicit `--path` override or `$HOME`.
/// Home-directory lookup goes through `dirs::home_dir()` rather than a raw
/// `env::var_os("HOME")` read — the same crate the teacher's `core-config`
/// uses for its own default-path resolution — which on Unix still reflects
/// `$HOME` (spec.md §6's documented environment variable) but degrades
/// gracefully on platforms where `HOME` isn't how the home directory is
/// found. An environment error (no `--path` and no resolvable home
/// directory) is reported as plain text rather than a custom error type,
/// matching the teacher's `anyhow`-first convention.
pub fn resolve(path_override: Option<&str>) -> Result<PathBuf> {
    if let Some(p) = path_override {
        return Ok(PathBuf::from(p));
    }

    match dirs::home_dir() {
        Some(home) => Ok(home.join(DEFAULT_TRIES_PATH_SUFFIX)),
        None => bail!("Could not determine tries path. Set HOME or use --path."),
    }
}

/// Ensures `root` exists, creating it (and any missing parents) if not.
pub fn ensure_exists(root: &Path) -> Result<()> {
    if root.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(root)
        .with_context(|| format!("could not create tries directory: {}", root.display()))
}
