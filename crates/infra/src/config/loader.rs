//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `EVENTREG_DB_PATH` is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. With no file either, uses [`Config::default`]
//!
//! ## Environment Variables
//! - `EVENTREG_DB_PATH`: Snapshot database file path (required for env mode)
//! - `EVENTREG_DB_POOL_SIZE`: Connection pool size
//! - `EVENTREG_ACCOMMODATION_PRICING`: `per_room` or `per_guest`
//! - `EVENTREG_COVERAGE_POLICY`: `as_entered` or `proportional`
//! - `EVENTREG_COVERAGE_STEP`: Coverage stepper granularity in percent
//! - `EVENTREG_LOG_LEVEL`: Default tracing filter
//! - `EVENTREG_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./eventreg.json` or `./eventreg.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use eventreg_domain::{
    AccommodationPricing, Config, CoveragePolicy, DatabaseConfig, EventRegError, LoggingConfig,
    PricingConfig, Result,
};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `EventRegError::Config` if an environment value is malformed or
/// a config file exists but cannot be parsed.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        // Path was given but another variable is malformed
        Err(e) if std::env::var("EVENTREG_DB_PATH").is_ok() => Err(e),
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `EVENTREG_DB_PATH` is required; every other variable falls back to its
/// default when unset.
///
/// # Errors
/// Returns `EventRegError::Config` if the path is missing or a value is
/// invalid.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("EVENTREG_DB_PATH")?;
    let defaults = Config::default();

    let pool_size = env_parse("EVENTREG_DB_POOL_SIZE", defaults.database.pool_size)?;
    let accommodation_pricing = env_parse::<AccommodationPricing>(
        "EVENTREG_ACCOMMODATION_PRICING",
        defaults.pricing.accommodation_pricing,
    )?;
    let coverage_policy =
        env_parse::<CoveragePolicy>("EVENTREG_COVERAGE_POLICY", defaults.pricing.coverage_policy)?;
    let coverage_step = env_parse("EVENTREG_COVERAGE_STEP", defaults.pricing.coverage_step)?;

    let level = std::env::var("EVENTREG_LOG_LEVEL").unwrap_or(defaults.logging.level);
    let json = env_bool("EVENTREG_LOG_JSON", defaults.logging.json);

    Ok(Config {
        database: DatabaseConfig { path: db_path, pool_size },
        pricing: PricingConfig { accommodation_pricing, coverage_policy, coverage_step },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `EventRegError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(EventRegError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EventRegError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EventRegError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, format detected by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EventRegError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EventRegError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(EventRegError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Returns the first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "eventreg.json",
        "eventreg.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        EventRegError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional variable, `default` when unset.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| EventRegError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map_or(default, |s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
