//! Shared fixtures for api integration tests.

#![allow(dead_code)]

use eventreg_domain::{Config, PersonalInfo};
use eventreg_lib::{AppContext, IN_MEMORY_DB_PATH};
use tempfile::TempDir;

/// Context backed by a SQLite file inside a fresh temp dir.
pub fn sqlite_context() -> (AppContext, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let mut config = Config::default();
    config.database.path = dir.path().join("eventreg.db").display().to_string();
    config.database.pool_size = 2;
    let ctx = AppContext::new_with_config(config).expect("context");
    (ctx, dir)
}

pub fn memory_context() -> AppContext {
    let mut config = Config::default();
    config.database.path = IN_MEMORY_DB_PATH.to_string();
    AppContext::new_with_config(config).expect("context")
}

pub fn registrant() -> PersonalInfo {
    PersonalInfo {
        first_name: "Kata".into(),
        last_name: "Varga".into(),
        email: "kata.varga@example.hu".into(),
        phone: "+36 30 555 1234".into(),
        ..PersonalInfo::default()
    }
}
