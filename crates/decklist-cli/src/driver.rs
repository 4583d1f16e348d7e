//! Batch driver - runs the formatter over a set of files
//!
//! Every path is access-checked before any file is touched; one
//! inaccessible path aborts the batch. After that each file runs its own
//! read → format → write/compare pipeline on a scoped thread, at most
//! [`worker_count`] at a time, and a read or write failure stays local to
//! that file.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use decklist_core::CheckReport;

use crate::error::{BatchAborted, DriverError};
use crate::files::FileAccessor;

// ── Configuration ──────────────────────────────────────────

/// Which actions to take per file; flags combine freely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode {
    pub check: bool,
    pub print: bool,
    pub write: bool,
}

impl Mode {
    /// Build a mode from flags, falling back to print-only when none is set
    pub fn from_flags(check: bool, print: bool, write: bool) -> Self {
        let print = print || !(check || write);
        Mode {
            check,
            print,
            write,
        }
    }
}

/// Everything one invocation needs, built once by `main`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub mode: Mode,
    pub json: bool,
    pub quiet: bool,
}

// ── Outcomes ───────────────────────────────────────────────

/// What happened to one successfully processed file
#[derive(Debug, Clone)]
pub struct Processed {
    pub report: CheckReport,
    pub written: bool,
}

/// Result of running the pipeline on one path
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Processed, DriverError>,
}

impl FileOutcome {
    /// False on I/O failure, or when checking and the file is not canonical
    pub fn is_success(&self, mode: Mode) -> bool {
        match &self.result {
            Ok(processed) => !mode.check || processed.report.valid,
            Err(_) => false,
        }
    }
}

// ── Pipeline ───────────────────────────────────────────────

/// Resolve relative paths against the current directory
pub fn resolve_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|p| std::path::absolute(p).unwrap_or_else(|_| p.clone()))
        .collect()
}

/// Access-check every path, collecting all failures
pub fn check_access_all<A: FileAccessor>(
    paths: &[PathBuf],
    mode: Mode,
    accessor: &A,
) -> Vec<DriverError> {
    paths
        .iter()
        .filter_map(|path| {
            accessor
                .check_access(path, mode.write)
                .err()
                .map(|source| DriverError::Access {
                    path: path.clone(),
                    source,
                })
        })
        .collect()
}

/// Read, format, and optionally write back a single file
///
/// Files that are already canonical are never rewritten.
pub fn process_file<A: FileAccessor>(
    path: &Path,
    mode: Mode,
    accessor: &A,
) -> Result<Processed, DriverError> {
    let text = accessor
        .read_text(path)
        .map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let report = decklist_core::check(&text);
    log::debug!(
        "{}: valid={} blocks={} cards={}",
        path.display(),
        report.valid,
        report.blocks,
        report.cards
    );

    let mut written = false;
    if mode.write && !report.valid {
        accessor
            .write_text(path, &report.formatted)
            .map_err(|source| DriverError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("formatted {}", path.display());
        written = true;
    }

    Ok(Processed { report, written })
}

/// Run the whole batch described by `config`
///
/// Outcomes come back in the order of `config.paths`.
///
/// # Errors
/// Returns [`BatchAborted`] without processing anything if any path
/// fails its access check.
pub fn run_batch<A: FileAccessor>(
    config: &Config,
    accessor: &A,
) -> Result<Vec<FileOutcome>, BatchAborted> {
    let paths = resolve_paths(&config.paths);

    let errors = check_access_all(&paths, config.mode, accessor);
    if !errors.is_empty() {
        return Err(BatchAborted {
            errors,
            total: paths.len(),
        });
    }

    let mode = config.mode;
    let mut outcomes = Vec::with_capacity(paths.len());
    for chunk in paths.chunks(worker_count()) {
        thread::scope(|s| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|path| {
                    s.spawn(move || FileOutcome {
                        path: path.clone(),
                        result: process_file(path, mode, accessor),
                    })
                })
                .collect();

            outcomes.extend(
                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic))),
            );
        });
    }

    Ok(outcomes)
}

/// Threads per chunk of files: the available parallelism, at least one
pub fn worker_count() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Process exit code for a finished batch: 0 if every file succeeded
pub fn exit_code(mode: Mode, outcomes: &[FileOutcome]) -> i32 {
    if outcomes.iter().all(|o| o.is_success(mode)) {
        0
    } else {
        1
    }
}

// ── Tests ──────────────────────────────────────────────────
