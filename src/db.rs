//! Database connection handling.
//!
//! The connection is constructed here, handed to the seed routines by
//! reference, and released when the owning binary's scope ends. There is no
//! process-global pool.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// Connect to the database named by `url` (postgres or mysql).
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(5)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    log::debug!("Database connection established");
    Ok(db)
}
