//! Application-level configuration loading: listening port, database and seed catalog.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

use crate::dao::{models::NewGameEntity, store::sqlite::SqliteConfig};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "LFG_BACK_CONFIG_PATH";
/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3333;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    port: u16,
    database: SqliteConfig,
    catalog: Vec<NewGameEntity>,
}

impl AppConfig {
    /// Load the configuration from the environment and the optional JSON file.
    pub fn load() -> Self {
        Self {
            port: port_from_env(),
            database: SqliteConfig::from_env(),
            catalog: load_catalog(&resolve_config_path()),
        }
    }

    /// Port the HTTP server listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Database connection settings.
    pub fn database(&self) -> &SqliteConfig {
        &self.database
    }

    /// Games inserted when the store starts with an empty catalog.
    pub fn catalog(&self) -> &[NewGameEntity] {
        &self.catalog
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database: SqliteConfig::default(),
            catalog: default_catalog(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    games: Vec<RawGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON representation of a single catalog entry inside the configuration file.
struct RawGame {
    name: String,
    #[serde(default)]
    banner_url: Option<String>,
}

impl From<RawGame> for NewGameEntity {
    fn from(value: RawGame) -> Self {
        Self {
            name: value.name,
            banner_url: value.banner_url,
        }
    }
}

fn port_from_env() -> u16 {
    match env::var("PORT") {
        Ok(value) => parse_port(&value).unwrap_or_else(|| {
            warn!(%value, default = DEFAULT_PORT, "invalid PORT; using default");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok()
}

/// Read the seed catalog from `path`, falling back to the built-in one.
fn load_catalog(path: &Path) -> Vec<NewGameEntity> {
    match fs::read_to_string(path) {
        Ok(contents) => match parse_catalog(&contents) {
            Ok(catalog) => {
                info!(
                    path = %path.display(),
                    count = catalog.len(),
                    "loaded game catalog from config"
                );
                catalog
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to parse config; falling back to defaults"
                );
                default_catalog()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                path = %path.display(),
                "config file not found; using built-in catalog"
            );
            default_catalog()
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "failed to read config; falling back to defaults"
            );
            default_catalog()
        }
    }
}

fn parse_catalog(contents: &str) -> Result<Vec<NewGameEntity>, serde_json::Error> {
    let raw = serde_json::from_str::<RawConfig>(contents)?;
    Ok(raw.games.into_iter().map(Into::into).collect())
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in catalog shipped with the binary.
fn default_catalog() -> Vec<NewGameEntity> {
    [
        "League of Legends",
        "Dota 2",
        "Counter-Strike",
        "Apex Legends",
        "Fortnite",
        "World of Warcraft",
    ]
    .into_iter()
    .map(|name| NewGameEntity {
        name: name.to_owned(),
        banner_url: None,
    })
    .collect()
}
