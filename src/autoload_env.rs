//! Loads `.env.<GO_ENV>`, falling back to `.env` when `GO_ENV` is unset or empty.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use once_cell::sync::OnceCell;

use crate::constants::{defaults, envvars};
use crate::loader::{self, LoadError};

static AUTOLOADED: OnceCell<()> = OnceCell::new();

/// File name for the given environment: `.env` if `app_env` is empty,
/// `.env.<app_env>` otherwise. The value is appended as-is.
pub fn env_file_name(app_env: &OsStr) -> OsString {
    let mut name = OsString::from(defaults::ENV_FILE);
    if !app_env.is_empty() {
        name.push(defaults::ENV_SUFFIX_SEPARATOR);
        name.push(app_env);
    }
    name
}

/// File name selected by the current value of `GO_ENV`.
pub fn selected_env_file() -> OsString {
    let app_env = env::var_os(envvars::GO_ENV).unwrap_or_default();
    env_file_name(&app_env)
}

/// Load the file picked by [`selected_env_file`], at most once per process.
/// Errors are discarded.
pub fn autoload_env() {
    AUTOLOADED.get_or_init(|| {
        let _ = load_env();
    });
}

pub fn load_env() -> Result<PathBuf, LoadError> {
    loader::load_named(selected_env_file())
}
