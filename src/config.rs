//! Configuration file and application identity

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::script::DEFAULT_INTERPRETER;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub interpreter: InterpreterConfig,
    pub chooser: ChooserConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InterpreterConfig {
    pub program: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_INTERPRETER.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChooserConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ChooserConfig {
    fn default() -> Self {
        Self {
            program: "fzf".to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    /// Falls back to $VISUAL, then $EDITOR
    pub command: Option<String>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load `explicit` if given, else the default location if it exists,
    /// else built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("loading config from {}", path.display());
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `$XDG_CONFIG_HOME/drafts/config.toml`, else `~/.config/drafts/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("drafts").join("config.toml"))
    }
}

/// Name and version reported by `drafts version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl AppInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}
