//! # EventReg Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON and TOML files)
//! - SQLite-backed registration snapshot store
//! - In-memory registration store
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `eventreg-core`
//! - Depends on `eventreg-domain` and `eventreg-core`
//! - Contains all "impure" code (I/O, environment)

pub mod config;
pub mod database;
pub mod errors;
pub mod memory_store;
pub mod observability;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
pub use memory_store::InMemoryRegistrationStore;
