//! Server configuration loaded from defaults, an optional YAML file and the environment

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix; `__` separates nested keys
pub const ENV_PREFIX: &str = "DISCOTEQUE__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog module settings
    #[serde(default)]
    pub catalog: catalog_service::Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8087".to_string()
}

fn default_database_url() -> String {
    "sqlite://discoteque.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Layer defaults, the YAML file (when it exists) and the environment
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let cfg = Self::figment(path).extract()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_a_file() {
        let cfg: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .extract()
            .unwrap();
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8087");
        assert_eq!(cfg.catalog.min_release_year, 1905);
        assert!(!cfg.logging.json);
    }

    #[test]
    fn yaml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database:\n  url: \"sqlite::memory:\"\ncatalog:\n  forbidden_words: [\"Odio\"]\n  max_release_year: 2030\n"
        )
        .unwrap();

        let cfg: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(file.path()))
            .extract()
            .unwrap();
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.database.max_connections, 8);

        assert_eq!(cfg.catalog.forbidden_words, vec!["Odio".to_string()]);
        assert_eq!(cfg.catalog.max_release_year, 2030);
        assert_eq!(cfg.catalog.min_release_year, 1905);
        assert!(cfg.catalog.seed_default_artists);
    }

    #[test]
    fn environment_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("DISCOTEQUE__CATALOG__MAX_RELEASE_YEAR", "2040");
            jail.set_env("DISCOTEQUE__LOGGING__JSON", "true");
            let cfg: AppConfig = AppConfig::figment(None).extract()?;
            assert_eq!(cfg.catalog.max_release_year, 2040);
            assert!(cfg.logging.json);
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<AppConfig, _> = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::string("server:\n  port: 80\n"))
            .extract();
        assert!(result.is_err());
    }
}
