//! The event loop: render, read one key, dispatch, repeat until an
//! outcome is produced.

use crate::filter::{self, sanitize_for_dirname};
use crate::outcome::SelectorOutcome;
use crate::render::{self, Frame};
use crate::view;
use anyhow::Result;
use core_scan::TryEntry;
use core_terminal::{Key, KeySource, RawModeGuard, Tty, window_size};
use core_tokens::{ExpandOptions, expand};
use std::path::PathBuf;
use std::time::SystemTime;

pub struct Picker<K: KeySource> {
    root: PathBuf,
    entries: Vec<TryEntry>,
    filter: String,
    view: Vec<usize>,
    selected: usize,
    scroll: usize,
    opts: ExpandOptions,
    keys: K,
    tty: Tty,
    /// `--and-exit`: render one frame, then exit with `Cancel` — a test
    /// hook for asserting on a single frame without driving a full
    /// interactive session.
    render_once: bool,
}

impl<K: KeySource> Picker<K> {
    pub fn new(
        root: PathBuf,
        initial_filter: String,
        opts: ExpandOptions,
        keys: K,
        render_once: bool,
    ) -> Result<Self> {
        let mut entries = core_scan::scan(&root)?;
        let now = SystemTime::now();
        let view = view::build_view(&mut entries, &initial_filter, now);
        let create_new = !initial_filter.is_empty();
        let selected = view::clamp_selected(0, view.len(), create_new);

        Ok(Self {
            root,
            entries,
            filter: initial_filter,
            view,
            selected,
            scroll: 0,
            opts,
            keys,
            tty: Tty::new(),
            render_once,
        })
    }

    fn refilter(&mut self) {
        let now = SystemTime::now();
        self.view = view::build_view(&mut self.entries, &self.filter, now);
        let create_new = !self.filter.is_empty();
        self.selected = view::clamp_selected(self.selected, self.view.len(), create_new);
    }

    fn render(&mut self) -> Result<()> {
        let (rows, cols) = window_size();
        let frame = Frame { rows, cols };
        self.scroll = view::adjust_scroll(self.scroll, self.selected, frame.list_height());

        let markup = render::render_frame(
            &self.entries,
            &self.view,
            &self.filter,
            self.selected,
            self.scroll,
            &frame,
            SystemTime::now(),
        );
        let expansion = expand(&markup, &self.opts);
        self.tty.write_frame(&expansion.bytes)?;
        Ok(())
    }

    /// Runs the event loop to completion, restoring cooked mode and
    /// cursor visibility on every exit path (including an early return
    /// from a scan/render error).
    ///
    /// Entering raw mode requires a controlling tty, which isn't
    /// available in a headless test run — tests drive [`Picker::run_in`]
    /// directly instead and skip this wrapper.
    pub fn run(mut self) -> Result<SelectorOutcome> {
        let _guard = RawModeGuard::enter()?;
        self.run_in()
    }

    /// The raw-mode-independent body of [`Picker::run`]: setup escapes,
    /// event loop, teardown escapes. Exposed separately so it can be
    /// exercised without a controlling tty.
    pub fn run_in(&mut self) -> Result<SelectorOutcome> {
        let setup = expand("{hide}{cls}", &self.opts);
        self.tty.write_frame(&setup.bytes)?;

        let outcome = self.event_loop();

        let teardown = expand("{show}", &self.opts);
        // Best-effort: a failure here shouldn't mask the real outcome/error.
        let _ = self.tty.write_frame(&teardown.bytes);
        eprintln!();

        outcome
    }

    fn event_loop(&mut self) -> Result<SelectorOutcome> {
        loop {
            self.render()?;

            if self.render_once {
                return Ok(SelectorOutcome::Cancel);
            }

            let key = match self.keys.next_key()? {
                Some(key) => key,
                None => return Ok(SelectorOutcome::Cancel),
            };

            match key {
                Key::Escape | Key::CtrlC => return Ok(SelectorOutcome::Cancel),
                Key::Enter => return Ok(self.confirm()),
                Key::Up => {
                    self.selected = self.selected.saturating_sub(1);
                }
                Key::Down => {
                    let create_new = !self.filter.is_empty();
                    let ceiling = if create_new {
                        self.view.len()
                    } else {
                        self.view.len().saturating_sub(1)
                    };
                    self.selected = (self.selected + 1).min(ceiling);
                }
                Key::Backspace => {
                    if filter::pop_char(&mut self.filter) {
                        self.refilter();
                    }
                }
                Key::Char(c) if (0x20..=0x7e).contains(&(c as u32)) => {
                    if filter::push_char(&mut self.filter, c) {
                        self.refilter();
                    }
                }
                Key::Char(_) | Key::Left | Key::Right => {}
            }
        }
    }

    fn confirm(&self) -> SelectorOutcome {
        if self.selected < self.view.len() {
            let entry = &self.entries[self.view[self.selected]];
            SelectorOutcome::Cd(entry.path.clone())
        } else {
            let today = chrono::Local::now().format("%Y-%m-%d");
            let name = format!("{today}-{}", sanitize_for_dirname(&self.filter));
            SelectorOutcome::Mkdir(self.root.join(name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_terminal::ScriptedKeySource;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn picker_with(
        root: &std::path::Path,
        filter: &str,
        keys: &str,
    ) -> Picker<ScriptedKeySource> {
        Picker::new(
            root.to_path_buf(),
            filter.to_string(),
            ExpandOptions::default(),
            ScriptedKeySource::from_str(keys),
            false,
        )
        .unwrap()
    }

    #[test]
    fn enter_on_real_entry_yields_cd() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("2025-01-15-alpha")).unwrap();
        fs::create_dir(dir.path().join("old-beta")).unwrap();

        let mut picker = picker_with(dir.path(), "", "\r");
        let outcome = picker.run_in().unwrap();
        assert!(matches!(outcome, SelectorOutcome::Cd(_)));
    }

    #[test]
    fn enter_on_create_new_slot_yields_mkdir_with_sanitized_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut picker = picker_with(dir.path(), "my new try", "\r");
        let outcome = picker.run_in().unwrap();
        match outcome {
            SelectorOutcome::Mkdir(path) => {
                let name = path.file_name().unwrap().to_str().unwrap();
                assert!(name.ends_with("-my-new-try"));
            }
            other => panic!("expected Mkdir, got {other:?}"),
        }
    }

    #[test]
    fn escape_cancels() {
        let dir = tempfile::tempdir().unwrap();
        let mut picker = picker_with(dir.path(), "", "\x1b");
        assert_eq!(picker.run_in().unwrap(), SelectorOutcome::Cancel);
    }

    #[test]
    fn exhausted_key_source_cancels_rather_than_hanging() {
        let dir = tempfile::tempdir().unwrap();
        let mut picker = picker_with(dir.path(), "", "");
        assert_eq!(picker.run_in().unwrap(), SelectorOutcome::Cancel);
    }

    #[test]
    fn backspace_edits_filter_and_refilters() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        // Type an extra trailing char, delete it, then confirm against "alpha".
        let mut picker = picker_with(dir.path(), "", "alphaX\x7f\r");
        let outcome = picker.run_in().unwrap();
        match outcome {
            SelectorOutcome::Cd(path) => {
                assert_eq!(path.file_name().unwrap().to_str().unwrap(), "alpha");
            }
            other => panic!("expected Cd, got {other:?}"),
        }
    }
}
