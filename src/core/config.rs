//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.fusecraft/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::catalog::LoadOptions;
use crate::core::state::SessionOptions;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FusecraftConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path or http(s) URL of the catalog document.
    pub catalog: Option<String>,
    pub strict_recipes: Option<bool>,
    pub allow_repeat_selection: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub show_recipe_hints: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CATALOG: &str = "data/gamedata.json";
pub const DEFAULT_LOG_FILE: &str = "fusecraft.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog: String,
    pub strict_recipes: bool,
    pub allow_repeat_selection: bool,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub show_recipe_hints: bool,
}

impl ResolvedConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict_recipes: self.strict_recipes,
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            allow_repeat_selection: self.allow_repeat_selection,
        }
    }
}

/// Flags the binary accepts; `None` means "not given on the command line".
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub catalog: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.fusecraft/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fusecraft").join("config.toml"))
}

/// Load config from `~/.fusecraft/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FusecraftConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FusecraftConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FusecraftConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FusecraftConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FusecraftConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: FusecraftConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Fusecraft Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog = "data/gamedata.json"     # Path or http(s) URL. Env: FUSECRAFT_CATALOG
# strict_recipes = true              # Reject catalogs where two cards share a recipe
# allow_repeat_selection = true      # Allow the same card in both slots

# [logging]
# file = "fusecraft.log"             # Env: FUSECRAFT_LOG_FILE
# level = "info"                     # "error", "warn", "info", "debug", "trace", "off"

# [ui]
# show_recipe_hints = false          # Show how many recipes use the focused card
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
pub fn resolve(config: &FusecraftConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Catalog: CLI → env → config → default
    let catalog = cli
        .catalog
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FUSECRAFT_CATALOG").ok())
        .or_else(|| config.general.catalog.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG.to_string());

    // Log file: env → config → default
    let log_file = std::env::var("FUSECRAFT_LOG_FILE")
        .ok()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: CLI → env → config → default. Unparseable values fall through.
    let log_level = cli
        .log_level
        .map(|s| s.to_string())
        .into_iter()
        .chain(std::env::var("FUSECRAFT_LOG_LEVEL").ok())
        .chain(config.logging.level.clone())
        .find_map(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        catalog,
        strict_recipes: config.general.strict_recipes.unwrap_or(true),
        allow_repeat_selection: config.general.allow_repeat_selection.unwrap_or(true),
        log_file: PathBuf::from(log_file),
        log_level,
        show_recipe_hints: config.ui.show_recipe_hints.unwrap_or(false),
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level '{}'", raw);
            None
        }
    }
}
