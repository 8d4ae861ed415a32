//! Turns the positional words left over after global-flag parsing into a
//! `core_shell::Action`, exactly the way `examples/original_source/src/main.c`'s
//! `main()` routes `cmd_args` by hand: `clone`/`cd` by name, a leading URL by
//! shape, anything else folded into the picker's initial filter.

use chrono::Local;
use core_shell::Action;
use std::path::Path;

/// What a leftover word list resolves to, before a picker run (which needs
/// the filter, not an `Action`, since it hasn't produced an outcome yet).
pub enum Routed {
    /// Open the picker with this initial filter (possibly empty).
    Picker { query: String },
    /// Build a clone action directly — no picker involved.
    Clone(Action),
}

/// `https://`, `http://`, and `git@` are the three shorthand prefixes
/// spec.md's External Interfaces table names for `try URL` (+ `git clone`'s
/// own scp-style syntax).
pub fn looks_like_url(word: &str) -> bool {
    word.starts_with("https://") || word.starts_with("http://") || word.starts_with("git@")
}

/// Routes the words following any already-stripped `exec`, exactly as
/// spec.md §6 describes: `clone URL [NAME]`, a bare URL shorthand, `cd
/// [QUERY...]`, or anything else as a picker filter.
pub fn route(root: &Path, words: &[String]) -> Routed {
    match words {
        [] => Routed::Picker {
            query: String::new(),
        },
        [first, rest @ ..] if first == "clone" => Routed::Clone(clone_action(root, rest)),
        [first, rest @ ..] if first == "cd" => Routed::Picker {
            query: rest.join(" "),
        },
        [first, ..] if looks_like_url(first) => Routed::Clone(clone_action(root, words)),
        words => Routed::Picker {
            query: words.join(" "),
        },
    }
}

/// Builds the `Action::Clone` for `clone_args = [url, name?]`: the
/// directory name is `YYYY-MM-DD-NAME`, where `NAME` defaults to the URL's
/// basename with a trailing `.git` stripped (spec.md §6).
fn clone_action(root: &Path, clone_args: &[String]) -> Action {
    let url = clone_args.first().cloned().unwrap_or_default();
    let name = match clone_args.get(1) {
        Some(explicit) => explicit.clone(),
        None => derive_clone_name(&url),
    };
    let dirname = format!("{}-{name}", Local::now().format("%Y-%m-%d"));
    Action::Clone {
        url,
        path: root.join(dirname),
    }
}

/// Derives a directory-name tail from a clone URL: the last `/`-separated
/// segment, minus a trailing `.git`. Works for both `https://host/owner/repo.git`
/// and `git@host:owner/repo.git` forms since both use `/` before the final
/// segment.
pub fn derive_clone_name(url: &str) -> String {
    let basename = url.rsplit('/').next().unwrap_or(url);
    basename.strip_suffix(".git").unwrap_or(basename).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn empty_words_route_to_empty_picker_query() {
        let root = PathBuf::from("/tries");
        assert!(matches!(
            route(&root, &[]),
            Routed::Picker { query } if query.is_empty()
        ));
    }

    #[test]
    fn clone_word_routes_to_clone_action() {
        let root = PathBuf::from("/tries");
        let words = vec!["clone".to_string(), "https://example.com/foo/bar.git".to_string()];
        match route(&root, &words) {
            Routed::Clone(Action::Clone { url, path }) => {
                assert_eq!(url, "https://example.com/foo/bar.git");
                assert!(path.file_name().unwrap().to_str().unwrap().ends_with("-bar"));
            }
            _ => panic!("expected Clone"),
        }
    }

    #[test]
    fn clone_with_explicit_name_overrides_derived_name() {
        let root = PathBuf::from("/tries");
        let words = vec![
            "clone".to_string(),
            "https://example.com/foo/bar.git".to_string(),
            "mine".to_string(),
        ];
        match route(&root, &words) {
            Routed::Clone(Action::Clone { path, .. }) => {
                assert!(path.file_name().unwrap().to_str().unwrap().ends_with("-mine"));
            }
            _ => panic!("expected Clone"),
        }
    }

    #[test]
    fn bare_url_is_clone_shorthand() {
        let root = PathBuf::from("/tries");
        let words = vec!["https://example.com/foo/bar".to_string()];
        assert!(matches!(route(&root, &words), Routed::Clone(_)));
    }

    #[test]
    fn scp_style_url_is_clone_shorthand() {
        let root = PathBuf::from("/tries");
        let words = vec!["git@github.com:foo/bar.git".to_string()];
        match route(&root, &words) {
            Routed::Clone(Action::Clone { url, .. }) => assert_eq!(url, "git@github.com:foo/bar.git"),
            _ => panic!("expected Clone"),
        }
    }

    #[test]
    fn cd_word_routes_remaining_words_to_picker_query() {
        let root = PathBuf::from("/tries");
        let words = vec!["cd".to_string(), "foo".to_string(), "bar".to_string()];
        match route(&root, &words) {
            Routed::Picker { query } => assert_eq!(query, "foo bar"),
            _ => panic!("expected Picker"),
        }
    }

    #[test]
    fn plain_words_become_picker_query() {
        let root = PathBuf::from("/tries");
        let words = vec!["my".to_string(), "query".to_string()];
        match route(&root, &words) {
            Routed::Picker { query } => assert_eq!(query, "my query"),
            _ => panic!("expected Picker"),
        }
    }

    #[test]
    fn derive_clone_name_strips_dot_git_suffix() {
        assert_eq!(derive_clone_name("https://github.com/user/repo.git"), "repo");
        assert_eq!(derive_clone_name("https://github.com/user/repo"), "repo");
        assert_eq!(derive_clone_name("git@github.com:user/repo.git"), "repo");
    }
}
