//! Configuration structures
//!
//! Plain data loaded by `eventreg-infra`'s config loader. Every section has a
//! `Default` so partial files are accepted.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COVERAGE_STEP, DEFAULT_DB_PATH, DEFAULT_DB_POOL_SIZE, DEFAULT_LOG_LEVEL,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Snapshot store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: DEFAULT_DB_PATH.to_string(), pool_size: DEFAULT_DB_POOL_SIZE }
    }
}

/// Pricing and cost-sharing policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub accommodation_pricing: AccommodationPricing,
    #[serde(default)]
    pub coverage_policy: CoveragePolicy,
    /// Granularity of the coverage stepper; `0` or `1` disables snapping.
    #[serde(default = "default_coverage_step")]
    pub coverage_step: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            accommodation_pricing: AccommodationPricing::default(),
            coverage_policy: CoveragePolicy::default(),
            coverage_step: DEFAULT_COVERAGE_STEP,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

/// How the accommodation total is derived from the selected room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationPricing {
    /// Room price × nights
    #[default]
    PerRoom,
    /// Room price × nights × guests
    PerGuest,
}

crate::impl_domain_status_conversions!(AccommodationPricing {
    PerRoom => "per_room",
    PerGuest => "per_guest",
});

/// What to do when sponsors' coverage for one category exceeds 100%.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveragePolicy {
    /// Each sponsor pays its entered share; only the registrant's residual
    /// is clamped at zero.
    #[default]
    AsEntered,
    /// Scale all sponsor shares down so they sum to exactly the total.
    Proportional,
}

crate::impl_domain_status_conversions!(CoveragePolicy {
    AsEntered => "as_entered",
    Proportional => "proportional",
});

fn default_pool_size() -> u32 {
    DEFAULT_DB_POOL_SIZE
}

fn default_coverage_step() -> u32 {
    DEFAULT_COVERAGE_STEP
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
