//! Settings: built-in defaults + optional TOML config.
//!
//! - `Settings::default()` → built-in defaults
//! - `Settings::from_toml_file(path)` → load a config file
//! - `Settings::load(cli_path)` → `--config` if given, else ~/.eqstep/config.toml if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::core::solver::SolverOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub solver: SolverOptions,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub color: bool,
    pub json: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { color: true, json: false }
    }
}

impl Settings {
    /// Load from TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must load; the user default falls back to built-ins
    /// with a warning.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            return Self::from_toml_file(p);
        }
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(s) => return Ok(s),
                    Err(e) => eprintln!(
                        "{} {:#}; using built-in settings",
                        "warn:".yellow().bold(),
                        e
                    ),
                }
            }
        }
        Ok(Self::default())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing settings")
    }
}

/// ~/.eqstep/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".eqstep").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
