//! Service configuration: defaults, then `eventcraft.yaml`, then `EVENTCRAFT_*`
//! environment variables (`__` separates nested keys, e.g.
//! `EVENTCRAFT_SERVER__PORT=4000`).

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::{
    consts::server_const::{CONFIG_FILE, DEFAULT_HOST, DEFAULT_PORT, ENV_PREFIX},
    errors::Result,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base used for shareable links. Falls back to `http://{host}:{port}`.
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    SurrealKv,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: PathBuf::from("data/eventcraft.db"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_figment(Figment::new().merge(Yaml::file(CONFIG_FILE)))
    }

    /// Layers defaults under `overrides` and environment variables over both.
    pub fn from_figment(overrides: Figment) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(overrides)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn public_url(&self) -> String {
        match &self.server.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.bind_address()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_locally() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3587");
        assert_eq!(config.public_url(), "http://127.0.0.1:3587");
        assert_eq!(config.storage.backend, StorageBackend::SurrealKv);
    }

    #[test]
    fn overrides_are_layered_over_defaults() {
        let overrides = Figment::new().merge(Serialized::defaults(serde_json::json!({
            "server": { "port": 8080, "public_url": "https://invites.example.com/" },
            "storage": { "backend": "memory" }
        })));
        let config = Config::from_figment(overrides).expect("config should extract");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.public_url(), "https://invites.example.com");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.path, PathBuf::from("data/eventcraft.db"));
    }
}
