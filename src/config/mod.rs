use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};
use thiserror::Error;
use wfdb_core::usecases::Miles;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "waterfrontdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConfig {
    #[error("The connection pool size must be greater than 0")]
    EmptyConnectionPool,
    #[error("The media URL must not be empty")]
    EmptyMediaUrl,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let bundled = raw::Config::bundled()?;
        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str::<raw::Config>(&cfg_string)?.or(bundled),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    bundled
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub default_proximity: Miles,
    pub media_url: String,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.ok_or_else(|| anyhow!("Missing DB configuration"))?;
        if connection_pool_size == 0 {
            return Err(InvalidConfig::EmptyConnectionPool.into());
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            default_proximity,
            media_url,
        } = webserver.ok_or_else(|| anyhow!("Missing webserver configuration"))?;
        if media_url.trim().is_empty() {
            return Err(InvalidConfig::EmptyMediaUrl.into());
        }
        let webserver = WebServer {
            enable_cors: cors,
            default_proximity,
            media_url,
        };

        Ok(Self { db, webserver })
    }
}
