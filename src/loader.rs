use std::env;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::defaults;

// Messages never include file content: a malformed line may hold a secret.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("environment file '{file}' not found")]
    NotFound { file: String },
    #[error("could not read environment file '{file}': {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },
    #[error("could not parse environment file '{file}' (error at character {position})")]
    Parse { file: String, position: usize },
    #[error("could not load environment file '{file}': {message}")]
    Other { file: String, message: String },
}

impl LoadError {
    fn from_dotenv(file: &Path, err: dotenv::Error) -> Self {
        let file = file.display().to_string();
        match err {
            dotenv::Error::Io(source) if source.kind() == io::ErrorKind::NotFound => {
                LoadError::NotFound { file }
            }
            dotenv::Error::Io(source) => LoadError::Io { file, source },
            dotenv::Error::LineParse(_, position) => LoadError::Parse { file, position },
            other => LoadError::Other {
                file,
                message: other.to_string(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

pub(crate) fn load_default() -> Result<PathBuf, LoadError> {
    load_named(defaults::ENV_FILE)
}

/// Load `file` from the working directory only; parent directories are not searched.
///
/// The whole file is parsed before any variable is set, so a malformed file
/// leaves the environment unchanged.
pub(crate) fn load_named(file: impl AsRef<Path>) -> Result<PathBuf, LoadError> {
    let file = file.as_ref();
    let path = env::current_dir()
        .map_err(|source| LoadError::Io {
            file: file.display().to_string(),
            source,
        })?
        .join(file);

    let pairs = dotenv::from_path_iter(&path)
        .and_then(|iter| iter.collect::<Result<Vec<_>, _>>())
        .map_err(|e| LoadError::from_dotenv(file, e))?;

    for (key, value) in pairs {
        if env::var_os(&key).is_none() {
            env::set_var(key, value);
        }
    }
    log::debug!("Loaded {}", path.display());
    Ok(path)
}
