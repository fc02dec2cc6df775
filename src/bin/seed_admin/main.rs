//! Creates the super admin account, skipping if it already exists.

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
        log::error!("Super admin seed failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    let url = config
        .database_url()
        .context("DATABASE_URL must be set (env or config.toml)")?;

    let db = db::connect(&url).await?;

    if seed::seed_super_admin(&db).await? {
        log::info!("Super admin created: {}", catalog::SUPER_ADMIN_EMAIL);
        log::info!("Password: {}", catalog::SUPER_ADMIN_PASSWORD);
        log::warn!("Development credentials only. Rotate before any shared deployment.");
    } else {
        log::info!("Super admin already exists: {}", catalog::SUPER_ADMIN_EMAIL);
    }
    Ok(())
}
