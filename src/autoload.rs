//! Loads the default `.env` file into the process environment.
//!
//! Call [`autoload`] once at the top of `main`. Variables already present in
//! the environment are left untouched.

use std::path::PathBuf;

use once_cell::sync::OnceCell;

use crate::loader::{self, LoadError};

static AUTOLOADED: OnceCell<()> = OnceCell::new();

/// Load `.env` from the working directory (or the nearest parent holding one).
///
/// Runs at most once per process. A missing, unreadable or malformed file is
/// ignored; use [`load`] to find out what happened.
pub fn autoload() {
    AUTOLOADED.get_or_init(|| {
        let _ = load();
    });
}

/// Load `.env` and return the path that was read.
pub fn load() -> Result<PathBuf, LoadError> {
    loader::load_default()
}
