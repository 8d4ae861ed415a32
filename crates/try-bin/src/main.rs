//! `try`: CLI entrypoint for the ephemeral-workspace manager. Argument
//! routing mirrors `examples/original_source/src/main.c`'s `main()` by
//! hand (see `route.rs`); clap only recognizes the global flags and
//! collects the trailing command word(s) — it never generates help or
//! version text, which is markup rendered through `core_tokens` instead
//! (see `help.rs`).

mod help;
mod logging;
mod route;
mod tries_root;

use anyhow::{Context, Result};
use clap::Parser;
use core_picker::{Picker, SelectorOutcome};
use core_shell::{Action, Mode, ShellScript, dispatch as shell_dispatch};
use core_terminal::{ChainedKeySource, CrosstermKeySource, ScriptedKeySource};
use core_tokens::ExpandOptions;
use std::io;
use std::path::{Path, PathBuf};

/// Global flags may appear anywhere in argv; everything else is collected
/// into `args` in order, exactly like `cmd_args` in the C original.
#[derive(Parser, Debug)]
#[command(
    name = "try",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(long)]
    path: Option<String>,
    #[arg(long = "no-colors")]
    no_colors: bool,
    #[arg(long = "no-expand-tokens")]
    no_expand_tokens: bool,
    #[arg(long = "and-exit")]
    and_exit: bool,
    #[arg(long = "and-keys")]
    and_keys: Option<String>,
    #[arg(short = 'h', long = "help")]
    help: bool,
    #[arg(short = 'v', long = "version")]
    version: bool,
    /// The command word and its own arguments (`clone URL`, `cd QUERY...`,
    /// a bare query, `init [PATH]`, `exec ...`), in order.
    #[arg(value_name = "ARGS")]
    args: Vec<String>,
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let _log_guard = logging::init()?;

    let cli = match Cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            return Ok(1);
        }
    };

    let root = tries_root::resolve(cli.path.as_deref())?;

    let opts = ExpandOptions {
        colors_enabled: !cli.no_colors && std::env::var_os("NO_COLOR").is_none(),
        expand_tokens: !cli.no_expand_tokens,
    };

    if cli.help {
        help::print(&root, &opts);
        return Ok(0);
    }
    if cli.version {
        help::print_version();
        return Ok(0);
    }

    tries_root::ensure_exists(&root)?;

    match cli.args.split_first() {
        Some((first, rest)) if first == "init" => {
            run_init(&root, rest);
            Ok(0)
        }
        Some((first, rest)) if first == "exec" => {
            run_dispatch(&root, rest, Mode::Exec, &opts, cli.and_exit, cli.and_keys.as_deref())
        }
        _ => run_dispatch(&root, &cli.args, Mode::Direct, &opts, cli.and_exit, cli.and_keys.as_deref()),
    }
}

fn run_init(root: &Path, init_args: &[String]) {
    let path = init_args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| root.to_path_buf());
    let flavor = help::ShellFlavor::detect(std::env::var("SHELL").ok().as_deref());
    print!("{}", help::init_script(flavor, &path));
}

fn run_dispatch(
    root: &Path,
    words: &[String],
    mode: Mode,
    opts: &ExpandOptions,
    and_exit: bool,
    and_keys: Option<&str>,
) -> Result<i32> {
    match route::route(root, words) {
        route::Routed::Clone(action) => run_action(&action, mode),
        route::Routed::Picker { query } => run_picker(root, &query, mode, opts, and_exit, and_keys),
    }
}

fn run_action(action: &Action, mode: Mode) -> Result<i32> {
    let script = ShellScript::build(action);
    shell_dispatch(&script, mode, &mut io::stdout())
}

fn run_picker(
    root: &Path,
    query: &str,
    mode: Mode,
    opts: &ExpandOptions,
    and_exit: bool,
    and_keys: Option<&str>,
) -> Result<i32> {
    // `--and-keys` injects a scripted prefix; once it's drained the source
    // falls through to the real tty, so an interactive session can still
    // continue past a short injected sequence.
    let scripted = ScriptedKeySource::from_str(and_keys.unwrap_or(""));
    let keys = ChainedKeySource::new(scripted, CrosstermKeySource);

    let picker = Picker::new(root.to_path_buf(), query.to_string(), *opts, keys, and_exit)
        .with_context(|| format!("scanning tries root {}", root.display()))?;
    let outcome = picker.run()?;

    match outcome {
        SelectorOutcome::Cancel => {
            eprintln!("Cancelled.");
            Ok(1)
        }
        SelectorOutcome::Cd(path) => run_action(&Action::Cd(path), mode),
        SelectorOutcome::Mkdir(path) => run_action(&Action::Mkdir(path), mode),
    }
}
