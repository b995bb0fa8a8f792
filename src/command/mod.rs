mod check;
mod env_file;
mod get;

pub use check::{check, check_env};
pub use env_file::env_file;
pub use get::{get, get_env};
