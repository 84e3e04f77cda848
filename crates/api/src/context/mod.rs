//! Application context - dependency injection container

use std::sync::Arc;

use eventreg_core::{RegistrationStore, RegistrationWizard, WizardSettings};
use eventreg_domain::{Config, EventRegError, Result};
use eventreg_infra::{DbManager, InMemoryRegistrationStore, SqliteRegistrationStore};
use tokio::sync::Mutex;
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Database path that selects the in-memory store.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";

/// Type alias for registration store port trait object
type DynRegistrationStore = dyn RegistrationStore + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Option<Arc<DbManager>>,
    pub store: Arc<DynRegistrationStore>,
    pub wizard: Mutex<RegistrationWizard>,
}

impl AppContext {
    /// Load configuration and build the context.
    pub fn new() -> Result<Self> {
        let config = eventreg_infra::config::load()?;
        Self::new_with_config(config)
    }

    /// Build the context from an explicit configuration.
    ///
    /// `database.path == ":memory:"` keeps snapshots in process memory;
    /// any other path opens (and migrates) a SQLite database.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let (db, store): (Option<Arc<DbManager>>, Arc<DynRegistrationStore>) =
            if config.database.path == IN_MEMORY_DB_PATH {
                info!("using in-memory registration store");
                (None, Arc::new(InMemoryRegistrationStore::new()))
            } else {
                let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
                db.run_migrations()?;
                info!(db_path = %db.path().display(), "registration store ready");
                (Some(Arc::clone(&db)), Arc::new(SqliteRegistrationStore::new(db)))
            };

        let wizard = RegistrationWizard::new(WizardSettings::from(&config.pricing));

        Ok(Self { config, db, store, wizard: Mutex::new(wizard) })
    }

    pub fn settings(&self) -> WizardSettings {
        WizardSettings::from(&self.config.pricing)
    }

    /// Health of the snapshot store.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new()
            .add_component(self.check_database_health().await)
            .add_component(ComponentHealth::healthy("wizard"));
        status.calculate_score();
        status
    }

    async fn check_database_health(&self) -> ComponentHealth {
        let Some(db) = self.db.clone() else {
            return ComponentHealth::healthy("memory_store");
        };

        match tokio::task::spawn_blocking(move || db.health_check()).await {
            Ok(Ok(())) => ComponentHealth::healthy("database"),
            Ok(Err(err)) => ComponentHealth::unhealthy("database", err.to_string()),
            Err(join_err) => ComponentHealth::unhealthy(
                "database",
                EventRegError::Internal(join_err.to_string()).to_string(),
            ),
        }
    }
}
