//! Commands exposed to the frontend
//!
//! Every command takes the [`AppContext`](crate::AppContext), logs its
//! outcome and returns `Result<T, String>`.

pub mod catalog;
pub mod health;
pub mod registration;
pub mod snapshots;
pub mod sponsors;

pub use catalog::*;
pub use health::*;
pub use registration::*;
pub use snapshots::*;
pub use sponsors::*;
