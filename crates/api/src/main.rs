//! Headless entry point
//!
//! `eventreg` prints the health report and an empty cost overview.
//! `eventreg <token>` resumes a saved registration and prints its overview.

use anyhow::{Context, Result};
use eventreg_lib::{get_app_health, get_cost_overview, load_registration, AppContext};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let config = eventreg_infra::config::load().context("failed to load configuration")?;
    eventreg_infra::observability::init_tracing(&config.logging)
        .context("failed to initialize tracing")?;

    info!(db_path = %config.database.path, "starting eventreg");

    let ctx = AppContext::new_with_config(config).context("failed to build application context")?;

    let health = get_app_health(&ctx).await.map_err(anyhow::Error::msg)?;
    if !health.is_healthy {
        error!(message = ?health.message, "store unhealthy");
    }

    if let Some(token) = std::env::args().nth(1) {
        let state = load_registration(&ctx, token.clone())
            .await
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("failed to resume registration {token}"))?;
        info!(step = %state.step, submitted = state.submitted, "registration resumed");
    }

    let overview = get_cost_overview(&ctx).await.map_err(anyhow::Error::msg)?;
    let report = serde_json::json!({ "health": health, "costOverview": overview });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
