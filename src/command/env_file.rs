use anyhow::Result;

pub fn env_file() -> Result<()> {
    let name = dotenv_autoload::selected_env_file();
    log::debug!("GO_ENV selects {}", name.to_string_lossy());
    print!("{}", name.to_string_lossy());
    Ok(())
}
