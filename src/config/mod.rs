//! Configuration for the showcase
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/showcase/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod profile;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use profile::{CounterConfig, FileCounter, FileProfile, ProfileConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default page heading
pub const DEFAULT_TITLE: &str = "Hello, Welcome to React and TypeScript";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Page heading shown by the title component
    pub title: String,

    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Whether to run the interactive TUI (false = print the page once)
    pub enable_tui: bool,

    /// Record shown by the user-info panel
    pub profile: ProfileConfig,

    /// Dynamic counter seed
    pub counter: CounterConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: "auto".to_string(),
            enable_tui: true,
            profile: ProfileConfig::default(),
            counter: CounterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub title: Option<String>,
    pub theme: Option<String>,

    /// Optional [profile] section
    pub profile: Option<FileProfile>,

    /// Optional [counter] section
    pub counter: Option<FileCounter>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/showcase/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("showcase").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Ignore errors - config is optional
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read and parse a config file
    ///
    /// A missing file yields defaults. A file that exists but cannot be read
    /// or parsed is an error: a broken config should fail loudly rather than
    /// silently fall back to defaults.
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Title: file > default
        let title = file.title.unwrap_or(defaults.title);

        // Theme: env > file > default
        let theme = env("SHOWCASE_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("SHOWCASE_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let profile = ProfileConfig::from_file(file.profile);

        // Counter seed: env > file > default
        let mut counter = CounterConfig::from_file(file.counter);
        if let Some(initial) = env("SHOWCASE_COUNT").and_then(|v| v.trim().parse().ok()) {
            counter.initial = initial;
        }

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            title,
            theme,
            enable_tui,
            profile,
            counter,
            logging,
        }
    }
}
