use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for dramlog.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (DRAM_* prefix)
/// 3. Config file (~/.config/dramlog/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the `data/` tree.
    ///
    /// Can be set via:
    /// - CLI: --data-root /path/to/repo
    /// - ENV: DRAM_DATA_ROOT
    /// - Config: data_root = "/path/to/repo"
    /// - Default: current directory
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,

    /// Shared secret for the admin write endpoint. The endpoint
    /// refuses all writes while this is unset.
    ///
    /// Can be set via:
    /// - ENV: DRAM_ADMIN_TOKEN
    /// - Config: admin_token = "..."
    pub admin_token: Option<String>,

    /// Listen address for the HTTP server.
    ///
    /// Can be set via:
    /// - CLI: --bind 0.0.0.0:8080
    /// - ENV: DRAM_BIND_ADDR
    /// - Config: bind_addr = "0.0.0.0:8080"
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            admin_token: None,
            bind_addr: default_bind_addr(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/dramlog/config.toml
    /// Reads environment variables with DRAM_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("dram");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a data root override from the CLI.
    pub fn load_with_data_root(data_root: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.data_root = data_root;
        Ok(config)
    }
}

fn default_data_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_bind_addr() -> String {
    "127.0.0.1:5850".to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/dramlog/config.toml
/// - macOS: ~/Library/Application Support/dramlog/config.toml
/// - Windows: %APPDATA%\dramlog\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dramlog")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Dramlog Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (DRAM_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Directory containing the data/ tree (tastings, reviewers, lookups)
#
# Can also be set via:
# - CLI: dramlog --data-root /srv/dramlog bottles
# - Environment: DRAM_DATA_ROOT=/srv/dramlog
#data_root = "/srv/dramlog"

# Shared secret for the admin consumer-review endpoint.
# Writes are refused while this is unset.
#
# Can also be set via:
# - Environment: DRAM_ADMIN_TOKEN=change-me
#admin_token = "change-me"

# Listen address for the HTTP server
#
# Can also be set via:
# - CLI: dramlog serve --bind 0.0.0.0:8080
# - Environment: DRAM_BIND_ADDR=0.0.0.0:8080
#bind_addr = "127.0.0.1:5850"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
