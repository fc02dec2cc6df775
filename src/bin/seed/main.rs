//! Idempotent development seed.
//!
//! Populates the database with the full fixture catalog. Safe to re-run:
//! rows already present (by email, slug, name, or title) are skipped.

use aluconnect::app_config::AppConfig;
use aluconnect::seed::catalog;
use aluconnect::{db, seed};
use anyhow::Context;
use env_logger::Env;

#[actix_rt::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("Seed failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    let url = config
        .database_url()
        .context("DATABASE_URL must be set (env or config.toml)")?;

    let db = db::connect(&url).await?;

    log::info!("Starting database seed...");
    let summary = seed::seed(&db).await.context("Seed run aborted")?;
    summary.log();

    log::info!("Database seed completed");
    log::info!(
        "Sample login: {} / {}",
        catalog::ALUMNI[0].email,
        catalog::ALUMNI_PASSWORD
    );
    Ok(())
}
