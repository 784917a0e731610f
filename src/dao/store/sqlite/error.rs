//! Error types shared by the SQLite storage implementation.

use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The connection URL could not be parsed.
    #[error("invalid SQLite connection URL `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    /// Opening the connection pool failed.
    #[error("failed to connect to SQLite database `{url}`")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    /// Applying the bundled schema failed.
    #[error("failed to apply SQLite migrations")]
    Migrate {
        #[source]
        source: MigrateError,
    },
    #[error("SQLite health check failed")]
    HealthPing {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to list games")]
    ListGames {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to seed the game catalog")]
    SeedGames {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to create ad for game `{game_id}`")]
    CreateAd {
        game_id: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to list ads of game `{game_id}`")]
    ListAds {
        game_id: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to load ad `{ad_id}`")]
    LoadAd {
        ad_id: String,
        #[source]
        source: sqlx::Error,
    },
}

impl SqliteDaoError {
    /// Whether the database refused the statement because of a constraint.
    pub fn is_constraint_violation(&self) -> bool {
        let source = match self {
            SqliteDaoError::CreateAd { source, .. } | SqliteDaoError::SeedGames { source } => {
                source
            }
            _ => return false,
        };

        match source {
            sqlx::Error::Database(db) => {
                db.is_foreign_key_violation() || db.is_unique_violation() || db.is_check_violation()
            }
            _ => false,
        }
    }
}
