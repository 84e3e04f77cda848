//! # EventReg Domain
//!
//! Business domain types and models for the event registration wizard.
//!
//! This crate contains:
//! - Registration data types (personal info, selections, sponsors)
//! - Cost-sharing value types (coverage, breakdowns, split summaries)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other EventReg crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
