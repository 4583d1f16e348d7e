use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

mod driver;
mod error;
mod files;

use driver::{Config, FileOutcome, Mode};
use files::FsAccessor;

/// decklist - formats MTGO txt deck lists
///
/// Sorts every block of a deck list by card name, ignoring the quantity,
/// and separates blocks by exactly one blank line. Without a mode flag the
/// formatted lists are printed and no file is modified.
#[derive(Parser)]
#[command(name = "decklist", version, about, long_about = None)]
struct Cli {
    /// Check format of all supplied decklists, exit 1 if at least one is invalid
    #[arg(short, long)]
    check: bool,

    /// Print the formatted lists to stdout
    #[arg(short, long)]
    print: bool,

    /// Overwrite the supplied files with their formatted version
    #[arg(short, long)]
    write: bool,

    /// Output check results as JSON
    #[arg(long, requires = "check", conflicts_with = "print")]
    json: bool,

    /// No per-file diagnostics; rely on the exit code
    #[arg(short, long)]
    quiet: bool,

    /// Deck list files
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            paths: cli.files,
            mode: Mode::from_flags(cli.check, cli.print, cli.write),
            json: cli.json,
            quiet: cli.quiet,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(Cli::parse());
    process::exit(run(&config));
}

fn run(config: &Config) -> i32 {
    let outcomes = match driver::run_batch(config, &FsAccessor) {
        Ok(outcomes) => outcomes,
        Err(aborted) => {
            if !config.quiet {
                for err in &aborted.errors {
                    eprintln!("{} {}", "error:".red().bold(), err);
                }
                eprintln!("{}", aborted);
            }
            return 1;
        }
    };

    let mut stdout_ok = true;
    if config.mode.print {
        stdout_ok &= stdout_result(print_formatted(&mut io::stdout().lock(), &outcomes));
    }

    if !config.quiet {
        for outcome in &outcomes {
            report_outcome(config, outcome);
        }
    }

    if config.mode.check && config.json {
        stdout_ok &= stdout_result(print_json(&mut io::stdout().lock(), &outcomes));
    }

    if !stdout_ok {
        return 1;
    }
    driver::exit_code(config.mode, &outcomes)
}

/// A closed pipe (`decklist deck.txt | head -1`) just ends the output;
/// any other write error is reported and fails the run
fn stdout_result(result: io::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed: {}", e);
            true
        }
        Err(e) => {
            eprintln!("{} writing to stdout: {}", "error:".red().bold(), e);
            false
        }
    }
}

/// Formatted text of every readable file, blank line between files
fn print_formatted<W: Write>(out: &mut W, outcomes: &[FileOutcome]) -> io::Result<()> {
    let mut first = true;
    for outcome in outcomes {
        if let Ok(processed) = &outcome.result {
            if !first {
                writeln!(out)?;
            }
            out.write_all(processed.report.formatted.as_bytes())?;
            first = false;
        }
    }
    out.flush()
}

fn report_outcome(config: &Config, outcome: &FileOutcome) {
    match &outcome.result {
        Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
        Ok(processed) => {
            if config.mode.check && !processed.report.valid {
                let note = if processed.written { " (rewritten)" } else { "" };
                eprintln!(
                    "{} {}{}",
                    "Invalid format:".red(),
                    outcome.path.display(),
                    note
                );
            }
        }
    }
}

fn print_json<W: Write>(out: &mut W, outcomes: &[FileOutcome]) -> io::Result<()> {
    let entries: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(processed) => serde_json::json!({
                "path": outcome.path.display().to_string(),
                "valid": processed.report.valid,
                "blocks": processed.report.blocks,
                "cards": processed.report.cards,
                "line_ending": processed.report.line_ending,
                "error": null,
            }),
            Err(err) => serde_json::json!({
                "path": outcome.path.display().to_string(),
                "valid": false,
                "blocks": 0,
                "cards": 0,
                "line_ending": null,
                "error": err.to_string(),
            }),
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries)?;
    writeln!(out, "{}", json)?;
    out.flush()
}
