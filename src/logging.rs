//! Tracing setup: one subscriber writing to stdout and to a log file per launch.
//!
//! Files are named `vidpredict_<local timestamp>.log` under the app's `logs`
//! directory; only the newest [`MAX_LOG_FILES`] of them are kept.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Log files kept across launches.
pub const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "vidpredict_";
const DEFAULT_FILTER: &str = "info";

const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
const LINE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

struct ActiveLog {
    path: PathBuf,
    _guard: WorkerGuard,
}

static ACTIVE_LOG: OnceLock<ActiveLog> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Log directory unavailable: {0}")]
    Dir(#[from] app_dirs::AppDirError),
    #[error("Failed to create log file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to list old logs in {path}: {source}")]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to remove old log {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log file timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber and return the path of this launch's log file.
///
/// Calling it again returns the same path without reinstalling anything.
/// `RUST_LOG` overrides the default filter.
pub fn init() -> Result<PathBuf, LoggingError> {
    if let Some(active) = ACTIVE_LOG.get() {
        return Ok(active.path.clone());
    }

    let dir = app_dirs::logs_dir()?;
    let file_name = log_file_name(now_local_or_utc())?;
    let path = dir.join(&file_name);
    let file = fs::File::create(&path).map_err(|source| LoggingError::CreateFile {
        path: path.clone(),
        source,
    })?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);
    let removed = prune_logs(&dir, MAX_LOG_FILES)?;

    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer: fmt::time::OffsetTime<BorrowedFormatItem<'static>> =
        fmt::time::OffsetTime::new(offset, LINE_STAMP.into());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_timer(timer.clone()).with_writer(std::io::stdout))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber)?;

    let active = ACTIVE_LOG.get_or_init(|| ActiveLog {
        path,
        _guard: guard,
    });
    tracing::info!(removed, "Logging to {}", active.path.display());
    Ok(active.path.clone())
}

fn log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    Ok(format!("{LOG_FILE_PREFIX}{}.log", now.format(FILE_STAMP)?))
}

fn is_own_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log"))
}

/// Delete all but the `keep` most recently modified log files; returns how many went.
fn prune_logs(dir: &Path, keep: usize) -> Result<usize, LoggingError> {
    let listing = fs::read_dir(dir).map_err(|source| LoggingError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut logs = listing
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .map(|entry| entry.path())
        .filter(|path| is_own_log(path))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect::<Vec<_>>();
    logs.sort_by(|a, b| b.0.cmp(&a.0));

    let stale = logs.split_off(keep.min(logs.len()));
    let removed = stale.len();
    for (_, path) in stale {
        fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile { path, source })?;
    }
    Ok(removed)
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
