//! Database implementations

pub mod manager;
pub mod registration_store;

pub use manager::*;
pub use registration_store::*;
