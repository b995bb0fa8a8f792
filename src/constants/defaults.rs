pub const ENV_FILE: &str = ".env";
pub const ENV_SUFFIX_SEPARATOR: &str = ".";

pub const LOG_LEVEL: &str = "info";
