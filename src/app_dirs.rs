//! Location of the `.vidpredict` directory that holds `config.toml` and `logs/`.
//!
//! The base is the OS config directory unless `VIDPREDICT_CONFIG_HOME` names
//! another one.

use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::Mutex;

use directories::BaseDirs;
use thiserror::Error;

/// Directory created under the config base.
pub const APP_DIR_NAME: &str = ".vidpredict";
/// Environment variable that replaces the OS config directory.
pub const CONFIG_HOME_ENV: &str = "VIDPREDICT_CONFIG_HOME";
const LOGS_DIR_NAME: &str = "logs";

#[cfg(test)]
static TEST_BASE: Mutex<Option<PathBuf>> = Mutex::new(None);

#[derive(Debug, Error)]
pub enum AppDirError {
    #[error("No config directory available; set {CONFIG_HOME_ENV} to choose one")]
    NoBaseDir,
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The `.vidpredict` directory, created on first use.
pub fn app_root_dir() -> Result<PathBuf, AppDirError> {
    let base = config_base_dir().ok_or(AppDirError::NoBaseDir)?;
    create(base.join(APP_DIR_NAME))
}

/// The `logs` directory inside [`app_root_dir`], created on first use.
pub fn logs_dir() -> Result<PathBuf, AppDirError> {
    create(app_root_dir()?.join(LOGS_DIR_NAME))
}

fn create(path: PathBuf) -> Result<PathBuf, AppDirError> {
    match std::fs::create_dir_all(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(AppDirError::CreateDir { path, source }),
    }
}

fn config_base_dir() -> Option<PathBuf> {
    test_base()
        .or_else(|| env_base(std::env::var_os(CONFIG_HOME_ENV).as_deref().map(Path::new)))
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
}

/// An unset or empty override falls through to the OS directory.
fn env_base(value: Option<&Path>) -> Option<PathBuf> {
    value
        .filter(|path| !path.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

#[cfg(test)]
fn test_base() -> Option<PathBuf> {
    TEST_BASE.lock().ok().and_then(|base| base.clone())
}

#[cfg(not(test))]
fn test_base() -> Option<PathBuf> {
    None
}

#[cfg(test)]
pub(crate) fn set_test_base(path: Option<PathBuf>) {
    *TEST_BASE.lock().unwrap_or_else(|err| err.into_inner()) = path;
}
