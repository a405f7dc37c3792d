use eyre::{Result, WrapErr};
use log::LevelFilter;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub port: u16,
    pub log_path: String,
    pub log_level: LevelFilter,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| eyre::eyre!("DATABASE_URL must be set"))?;
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .wrap_err_with(|| format!("PORT is not a valid port: {raw}"))?,
            None => 8080,
        };
        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw
                .parse()
                .wrap_err_with(|| format!("LOG_LEVEL is not a log level: {raw}"))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            log_path: lookup("LOG_PATH").unwrap_or_else(|| "data/log.txt".to_owned()),
            log_level,
        })
    }
}
