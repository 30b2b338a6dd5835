use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Basic (core) configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicConfig {
    /// RPC server listen address (e.g., "0.0.0.0", "127.0.0.1").
    /// TOML: `basic.listen_addr`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// RPC server listen port.
    /// TOML: `basic.listen_port`. Default: `50051`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Database URL for SQLite.
    /// TOML: `basic.database_url`. Default: `sqlite://menu.db`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Log level for tracing subscriber initialization (e.g., "error", "warn", "info", "debug", "trace").
    /// TOML: `basic.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Write the default restaurant, categories and dishes into an empty database at startup.
    /// TOML: `basic.seed_on_startup`. Default: `true`.
    #[serde(default = "default_seed_on_startup")]
    pub seed_on_startup: bool,

    /// Origins allowed to call the RPC endpoints from a browser. Empty allows any origin.
    /// TOML: `basic.cors_allowed_origins`. Default: empty.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            database_url: default_database_url(),
            loglevel: default_loglevel(),
            seed_on_startup: default_seed_on_startup(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

/// Default IP address for the RPC server listen address.
fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

/// Default port for the RPC server.
fn default_listen_port() -> u16 {
    50051
}

fn default_database_url() -> String {
    "sqlite://menu.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_seed_on_startup() -> bool {
    true
}
