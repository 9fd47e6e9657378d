//! Configuration loading and listen address resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Compiled default listen port (matches the published client default)
pub const DEFAULT_PORT: u16 = 4000;

/// Compiled default bind address
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Resolved listen address for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenConfig {
    pub bind: String,
    pub port: u16,
}

impl ListenConfig {
    /// Socket address string suitable for `TcpListener::bind`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Optional TOML config file contents
///
/// All fields are optional; anything absent falls through to the next
/// resolution tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub bind: Option<String>,
}

impl TomlConfig {
    /// Load and parse a config file from an explicit path
    pub fn load(path: &std::path::Path) -> Result<TomlConfig> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the platform-default config file, if one exists
    ///
    /// A missing or unparsable file never prevents startup: the former is
    /// silently treated as empty, the latter logs a warning and is ignored.
    pub fn load_default() -> TomlConfig {
        let Some(path) = default_config_path() else {
            return TomlConfig::default();
        };
        if !path.exists() {
            return TomlConfig::default();
        }
        match TomlConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                TomlConfig::default()
            }
        }
    }
}

/// Get default configuration file path for the platform
///
/// `~/.config/mps/config.toml` on Linux, the equivalent config directory on
/// macOS and Windows.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mps").join("config.toml"))
}

/// Listen address resolution following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. Compiled default (fallback)
pub fn resolve_listen(
    cli_port: Option<u16>,
    cli_bind: Option<&str>,
    env_var_name: &str,
) -> ListenConfig {
    let file = TomlConfig::load_default();
    resolve_listen_with_file(cli_port, cli_bind, env_var_name, &file)
}

/// Same resolution, with the config file tier supplied by the caller
pub fn resolve_listen_with_file(
    cli_port: Option<u16>,
    cli_bind: Option<&str>,
    env_var_name: &str,
    file: &TomlConfig,
) -> ListenConfig {
    let port = cli_port
        .or_else(|| port_from_env(env_var_name))
        .or(file.port)
        .unwrap_or(DEFAULT_PORT);

    let bind = cli_bind
        .map(str::to_string)
        .or_else(|| file.bind.clone())
        .unwrap_or_else(|| DEFAULT_BIND.to_string());

    ListenConfig { bind, port }
}

fn port_from_env(env_var_name: &str) -> Option<u16> {
    let raw = std::env::var(env_var_name).ok()?;
    match raw.parse() {
        Ok(port) => Some(port),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid port number", env_var_name, raw);
            None
        }
    }
}
