//! # EventReg API
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands (frontend → backend bridge), returning `Result<T, String>`
//! - Application context (dependency injection)
//! - Headless entry point
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
