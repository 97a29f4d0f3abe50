//! Process configuration resolved from the environment.
//!
//! Every value has a built-in default, so an empty environment still
//! yields a usable configuration. Empty variables count as unset.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Connection settings for the `dados` database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "mysql-db".to_string(),
            user: "root".to_string(),
            password: "rootpassword".to_string(),
            name: "meubanco".to_string(),
            port: 3306,
        }
    }
}

impl DbConfig {
    /// Defaults overlaid with `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_PORT`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(literal_env("DB_", &["host", "user", "password", "name"]))
            .merge(non_empty_env("DB_").only(&["port"]))
    }

    pub fn from_env() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

/// Listener and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(literal_env("", &["listen_addr", "loglevel"]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub db: DbConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, figment::Error> {
        Ok(Self {
            server: ServerConfig::figment().extract()?,
            db: DbConfig::from_env()?,
        })
    }
}

/// String settings taken verbatim from `{prefix}{KEY}`, skipping empty ones.
///
/// `Env` parses values as typed data (`007` becomes `7`), so text fields
/// bypass it.
fn literal_env(prefix: &str, keys: &[&str]) -> Serialized<BTreeMap<String, String>> {
    let values = keys
        .iter()
        .filter_map(|key| {
            let var = format!("{prefix}{}", key.to_ascii_uppercase());
            std::env::var(var)
                .ok()
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v))
        })
        .collect();
    Serialized::defaults(values)
}

/// Typed env provider under `prefix` that skips variables set to an empty string.
fn non_empty_env(prefix: &'static str) -> Env {
    Env::prefixed(prefix).filter(move |key| {
        let var = format!("{prefix}{}", key.as_str().to_ascii_uppercase());
        std::env::var(var).is_ok_and(|v| !v.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn db_config_falls_back_to_defaults() {
        Jail::expect_with(|_jail| {
            let cfg = DbConfig::from_env()?;
            assert_eq!(cfg.host, "mysql-db");
            assert_eq!(cfg.user, "root");
            assert_eq!(cfg.password, "rootpassword");
            assert_eq!(cfg.name, "meubanco");
            assert_eq!(cfg.port, 3306);
            Ok(())
        });
    }

    #[test]
    fn db_config_uses_literal_env_values() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_HOST", "10.0.0.7:not-validated");
            jail.set_env("DB_USER", "app");
            jail.set_env("DB_PASSWORD", "s3cr3t");
            jail.set_env("DB_NAME", "outro");
            jail.set_env("DB_PORT", "3307");
            let cfg = DbConfig::from_env()?;
            assert_eq!(
                cfg,
                DbConfig {
                    host: "10.0.0.7:not-validated".to_string(),
                    user: "app".to_string(),
                    password: "s3cr3t".to_string(),
                    name: "outro".to_string(),
                    port: 3307,
                }
            );
            Ok(())
        });
    }

    #[test]
    fn partially_set_env_mixes_with_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_NAME", "escola");
            let cfg = DbConfig::from_env()?;
            assert_eq!(cfg.name, "escola");
            assert_eq!(cfg.host, "mysql-db");
            assert_eq!(cfg.password, "rootpassword");
            Ok(())
        });
    }

    #[test]
    fn empty_env_value_counts_as_unset() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_HOST", "");
            jail.set_env("DB_PASSWORD", "");
            let cfg = DbConfig::from_env()?;
            assert_eq!(cfg.host, "mysql-db");
            assert_eq!(cfg.password, "rootpassword");
            Ok(())
        });
    }

    #[test]
    fn string_settings_keep_their_literal_text() {
        Jail::expect_with(|jail| {
            jail.set_env("DB_PASSWORD", "123456");
            jail.set_env("DB_USER", "true");
            jail.set_env("DB_NAME", "007");
            jail.set_env("DB_HOST", "[abc,def]");
            let cfg = DbConfig::from_env()?;
            assert_eq!(cfg.password, "123456");
            assert_eq!(cfg.user, "true");
            assert_eq!(cfg.name, "007");
            assert_eq!(cfg.host, "[abc,def]");
            assert_eq!(cfg.port, 3306);
            Ok(())
        });
    }

    #[test]
    fn numeric_loglevel_text_is_not_reinterpreted() {
        Jail::expect_with(|jail| {
            jail.set_env("LOGLEVEL", "0");
            let cfg = ServerConfig::figment().extract::<ServerConfig>()?;
            assert_eq!(cfg.loglevel, "0");
            Ok(())
        });
    }

    #[test]
    fn server_config_reads_listen_addr_and_loglevel() {
        Jail::expect_with(|jail| {
            jail.set_env("LISTEN_ADDR", "127.0.0.1:9090");
            let cfg = AppConfig::from_env()?;
            assert_eq!(cfg.server.listen_addr, "127.0.0.1:9090");
            assert_eq!(cfg.server.loglevel, "info");
            assert_eq!(cfg.db, DbConfig::default());
            Ok(())
        });
    }
}
