mod basic;

pub use basic::BasicConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::MenuError;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,
}

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides; nested keys are split on `__`,
/// e.g. `MENU_BASIC__LISTEN_PORT=9000`.
const ENV_PREFIX: &str = "MENU_";

impl Config {
    /// Builds a Figment that merges defaults, an optional TOML file and `MENU_*` env vars.
    pub fn figment_from(path: impl AsRef<Path>) -> Figment {
        let path = path.as_ref();
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if path.is_file() {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn figment() -> Figment {
        Self::figment_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads configuration from `config.toml` (if present) and the environment.
    pub fn load() -> Result<Self, MenuError> {
        let cfg: Self = Self::figment().extract()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.basic.listen_port, 50051);
            assert_eq!(cfg.basic.database_url, "sqlite://menu.db");
            assert!(cfg.basic.seed_on_startup);
            assert!(cfg.basic.cors_allowed_origins.is_empty());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_toml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                [basic]
                listen_port = 6000
                loglevel = "debug"
                seed_on_startup = false
                "#,
            )?;
            jail.set_env("MENU_BASIC__LISTEN_PORT", "7000");

            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.basic.listen_port, 7000);
            assert_eq!(cfg.basic.loglevel, "debug");
            assert!(!cfg.basic.seed_on_startup);
            Ok(())
        });
    }
}
