//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.greenleaf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::http::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GreenleafConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub currency_symbol: Option<String>,
    pub all_label: Option<String>,
    pub paginate_filtered_views: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY_SYMBOL: &str = "৳";
pub const DEFAULT_ALL_LABEL: &str = "All Trees";
pub const DEFAULT_PAGINATE_FILTERED_VIEWS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub currency_symbol: String,
    pub all_label: String,
    /// When false, only the unfiltered view grows on scroll.
    pub paginate_filtered_views: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            all_label: DEFAULT_ALL_LABEL.to_string(),
            paginate_filtered_views: DEFAULT_PAGINATE_FILTERED_VIEWS,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.greenleaf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".greenleaf").join("config.toml"))
}

/// Load config from `~/.greenleaf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GreenleafConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GreenleafConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GreenleafConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<GreenleafConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GreenleafConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GreenleafConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Greenleaf Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [catalog]
# base_url = "https://openapi.programming-hero.com/api"   # Or set GREENLEAF_BASE_URL

# [display]
# currency_symbol = "৳"
# all_label = "All Trees"
# paginate_filtered_views = true     # false: only the "all" view grows on scroll
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &GreenleafConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_base_url, std::env::var("GREENLEAF_BASE_URL").ok())
}

fn resolve_with_env(
    config: &GreenleafConfig,
    cli_base_url: Option<&str>,
    env_base_url: Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or(env_base_url)
        .or_else(|| config.catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let display = &config.display;

    ResolvedConfig {
        base_url,
        currency_symbol: display
            .currency_symbol
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()),
        all_label: display
            .all_label
            .clone()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ALL_LABEL.to_string()),
        paginate_filtered_views: display
            .paginate_filtered_views
            .unwrap_or(DEFAULT_PAGINATE_FILTERED_VIEWS),
    }
}
