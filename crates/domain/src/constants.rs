//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Coverage percentages
pub const MIN_COVERAGE_PERCENT: u32 = 0;
pub const MAX_COVERAGE_PERCENT: u32 = 100;
pub const DEFAULT_COVERAGE_STEP: u32 = 5;

// A category with nothing to pay for is fully self-covered
pub const FULL_SELF_PERCENTAGE: u32 = 100;

// Currency display (fixed locale of the event)
pub const CURRENCY_SUFFIX: &str = "Ft";

// Persistence
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;
pub const NEW_SPONSOR_ID_PREFIX: &str = "new-";

// Defaults
pub const DEFAULT_DB_PATH: &str = "eventreg.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
pub const DEFAULT_LOG_LEVEL: &str = "info";
