use std::path::PathBuf;

use anyhow::Result;
use dotenv_autoload::LoadError;

fn report(loaded: Result<PathBuf, LoadError>) -> Result<()> {
    let path = loaded?;
    log::info!("Loaded {}", path.display());
    print!("{}", path.display());
    Ok(())
}

pub fn check() -> Result<()> {
    report(dotenv_autoload::load())
}

pub fn check_env() -> Result<()> {
    report(dotenv_autoload::load_env())
}
