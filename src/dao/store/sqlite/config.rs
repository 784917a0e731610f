use std::env;

use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://lfg.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration describing how to open the SQLite database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteConfig {
    pub url: String,
    pub max_connections: u32,
}

impl SqliteConfig {
    /// Construct a configuration for the given database URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Private in-memory database, used by tests.
    ///
    /// Every connection to `sqlite::memory:` opens a distinct database, so the
    /// pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_owned(),
            max_connections: 1,
        }
    }

    /// Build a configuration from `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`,
    /// falling back to a local `lfg.db` file.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse::<u32>().ok().filter(|n| *n > 0).unwrap_or_else(|| {
                warn!(%value, "invalid DATABASE_MAX_CONNECTIONS; using default");
                DEFAULT_MAX_CONNECTIONS
            }),
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Self {
            url,
            max_connections,
        }
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}
