mod argsets;
mod command;

use anyhow::{anyhow, Result};
use dotenv_autoload::constants::{defaults, envvars};
use env_logger::Env;

const CMD_ENV_FILE: &str = "env-file";
const CMD_GET: &str = "get";
const CMD_GET_ENV: &str = "get-env";
const CMD_CHECK: &str = "check";
const CMD_CHECK_ENV: &str = "check-env";

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_ENV_FILE) => command::env_file(),
        Some(CMD_GET) => command::get(argsets::GetArgs {
            key: args.free_from_str()?,
        }),
        Some(CMD_GET_ENV) => command::get_env(argsets::GetArgs {
            key: args.free_from_str()?,
        }),
        Some(CMD_CHECK) => command::check(),
        Some(CMD_CHECK_ENV) => command::check_env(),
        _ => Err(anyhow!(
            "Subcommand must be one of 'env-file', 'get', 'get-env', 'check', 'check-env'"
        )),
    }
}
