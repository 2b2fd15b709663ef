//! Configuration model loaded from external sources.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::domain::content::SiteContent;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// YAML file with the marketing copy, services and articles.
    pub content_path: String,
    /// At least 64 bytes; signs the session and flash cookies.
    pub secret: String,
    /// Base URL of the clinic API.
    pub api_url: String,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
    /// Lifetime of cached API reads; `0` disables the cache.
    #[serde(default)]
    pub query_cache_ttl_secs: u64,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_api_timeout_secs() -> u64 {
    10
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl ServerConfig {
    /// Loads `config/default.yaml`, the optional `config/{app_env}.yaml`
    /// profile and `APP_*` environment overrides, in that order.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    pub fn query_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.query_cache_ttl_secs)
    }
}

/// Reads the site content file.
pub fn load_site_content(path: &str) -> Result<SiteContent, ConfigError> {
    Config::builder()
        .add_source(File::new(path, FileFormat::Yaml))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_file_parses() {
        let content = load_site_content("config/content.yaml").unwrap();
        assert!(!content.banner.title.is_empty());
        assert!(!content.services.is_empty());
        assert!(content.posts.len() > DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn default_profile_parses() {
        let config = Config::builder()
            .add_source(File::with_name("config/default"))
            .build()
            .unwrap()
            .try_deserialize::<ServerConfig>()
            .unwrap();
        assert_eq!(config.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert!(config.secret.len() >= 64);
    }
}
