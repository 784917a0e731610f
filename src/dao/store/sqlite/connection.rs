use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
};

/// Open the pool described by `config` and apply the bundled migrations.
pub async fn establish_pool(config: &SqliteConfig) -> SqliteResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|source| SqliteDaoError::InvalidUrl {
            url: config.url.clone(),
            source,
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        // An in-memory database disappears with its last connection.
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .map_err(|source| SqliteDaoError::Connect {
            url: config.url.clone(),
            source,
        })?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|source| SqliteDaoError::Migrate { source })?;

    info!(url = %config.url, "SQLite store ready");
    Ok(pool)
}
