//! Clean-slate rebuild: deletes every seeded table in reverse dependency
//! order, then runs the full seed against the empty database.

use aluconnect::app_config::AppConfig;
use aluconnect::{db, seed};
use anyhow::Context;
use env_logger::Env;

#[actix_rt::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("Clean-and-seed failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    let url = config
        .database_url()
        .context("DATABASE_URL must be set (env or config.toml)")?;

    let db = db::connect(&url).await?;

    log::info!("Cleaning database...");
    seed::clean(&db).await.context("Clean aborted")?;

    log::info!("Reseeding...");
    let summary = seed::seed(&db).await.context("Seed run aborted")?;
    summary.log();

    log::info!("Clean-and-seed completed");
    Ok(())
}
