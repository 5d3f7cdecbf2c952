//! Startup configuration: command-line flags first, then environment.

use quotebook_core::{
    ConfigError, DB_URL_ENV, DEFAULT_HOST, HOST_ENV, PORT_ENV, env_parse_required,
    env_parse_with_default, env_required,
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum StoreConfig {
    Postgres(String),
    Memory,
}

#[derive(Debug)]
pub(crate) struct ServeConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl ServeConfig {
    pub(crate) fn resolve(
        port: Option<u16>,
        host: Option<String>,
        database_url: Option<String>,
        in_memory: bool,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(p) => p,
            None => env_parse_required(PORT_ENV)?,
        };
        let host = host.unwrap_or_else(|| env_parse_with_default(HOST_ENV, DEFAULT_HOST.to_owned()));
        let store = if in_memory {
            StoreConfig::Memory
        } else {
            StoreConfig::Postgres(resolve_database_url(database_url)?)
        };
        Ok(Self { host, port, store })
    }

    pub(crate) fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn resolve_database_url(flag: Option<String>) -> Result<String, ConfigError> {
    match flag.filter(|u| !u.trim().is_empty()) {
        Some(url) => Ok(url),
        None => env_required(DB_URL_ENV),
    }
}
