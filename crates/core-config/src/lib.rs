//! Configuration loading and parsing.
//!
//! Parses `casement.toml`, looked up in the working directory first and the
//! platform config dir second (or an explicit override path). Unknown fields
//! are ignored and a missing or unparsable file falls back to defaults, so a
//! configuration problem never prevents the UI from coming up.
//!
//! Settings:
//! * `[border] style`: glyph preset for newly created windows
//!   (`plain`, `rounded`, `double`, `ascii`).
//! * `[demo] pause_ms`: pacing of the demo binary between scene steps.

use anyhow::Result;
use core_surface::BorderGlyphs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone)]
pub struct BorderConfig {
    #[serde(default = "BorderConfig::default_style")]
    pub style: String,
}

impl BorderConfig {
    fn default_style() -> String {
        "plain".to_string()
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            style: Self::default_style(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    #[serde(default = "DemoConfig::default_pause_ms")]
    pub pause_ms: u64,
}

impl DemoConfig {
    const fn default_pause_ms() -> u64 {
        1500
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            pause_ms: Self::default_pause_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub border: BorderConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Config {
    /// Resolve the configured border style to a glyph set. An unknown style
    /// name is reported once and falls back to the plain preset.
    pub fn border_glyphs(&self) -> BorderGlyphs {
        match BorderGlyphs::named(&self.border.style) {
            Some(glyphs) => glyphs,
            None => {
                warn!(target: "config", style = %self.border.style, "unknown border style, using plain");
                BorderGlyphs::PLAIN
            }
        }
    }
}

/// Best-effort config path following platform conventions: prefer a local
/// `casement.toml`, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("casement.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("casement").join("casement.toml");
    }
    PathBuf::from("casement.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                info!(target: "config", path = %path.display(), "configuration loaded");
                Ok(config)
            }
            Err(e) => {
                warn!(target: "config", path = %path.display(), error = %e, "parse failed, using defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}
