use std::env;

use anyhow::{anyhow, Result};

use crate::argsets::GetArgs;

fn print_var(key: &str) -> Result<()> {
    let value = env::var_os(key).ok_or_else(|| anyhow!("Variable '{key}' is not set"))?;
    print!("{}", value.to_string_lossy());
    Ok(())
}

pub fn get(args: GetArgs) -> Result<()> {
    dotenv_autoload::autoload();
    print_var(&args.key)
}

pub fn get_env(args: GetArgs) -> Result<()> {
    dotenv_autoload::autoload_env();
    print_var(&args.key)
}
