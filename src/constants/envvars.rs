pub const GO_ENV: &str = "GO_ENV";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
