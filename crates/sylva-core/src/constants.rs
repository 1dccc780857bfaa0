// Environment variables and fixed names shared across the workspace.

/// Environment variable holding the `EnvFilter` directive for log output.
pub const LOG_ENV_VAR: &str = "SYLVA_LOG";

/// Environment variable overriding `filter.strategy` ("traversal" or "closure").
pub const FILTER_STRATEGY_ENV_VAR: &str = "SYLVA_FILTER_STRATEGY";

/// Project config filename looked up by `SylvaConfig::load_from_dir`.
pub const CONFIG_FILENAME: &str = "sylva.toml";

/// Log levels accepted by `observability.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
