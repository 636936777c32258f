//! Reader configuration loaded from JSON.
//!
//! CHANGELOG:
//! - 02/16/2026 - Initial implementation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::db::{
    DisplayNamePolicy, ReadOptions, DEFAULT_CONVERSATION_LIMIT, DEFAULT_MESSAGE_LIMIT,
};
use crate::media::{LabelLocale, MediaLabels};

/// Environment variable pointing at a config file.
pub const CONFIG_ENV_VAR: &str = "WA_ARCHIVE_CONFIG";

/// Default config path.
///
/// Tries, in order:
/// 1. `WA_ARCHIVE_CONFIG` env var
/// 2. `<config dir>/wa-archive/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    config_path_from(std::env::var(CONFIG_ENV_VAR).ok().as_deref())
}

/// Resolve the config path from an env override (`~` expanded), else the config dir.
fn config_path_from(env_override: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(shellexpand::tilde(path).into_owned()));
    }
    dirs::config_dir().map(|dir| dir.join("wa-archive").join("config.json"))
}

/// Per-kind label overrides. Unset kinds keep the locale's label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub image: Option<String>,
    pub video: Option<String>,
    pub audio: Option<String>,
    pub document: Option<String>,
    pub sticker: Option<String>,
    pub unknown: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub conversation_limit: u32,
    pub message_limit: u32,
    pub locale: LabelLocale,
    pub labels: LabelOverrides,
    /// Substrings that mark a cached display name as redacted.
    pub masking_markers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conversation_limit: DEFAULT_CONVERSATION_LIMIT,
            message_limit: DEFAULT_MESSAGE_LIMIT,
            locale: LabelLocale::default(),
            labels: LabelOverrides::default(),
            masking_markers: DisplayNamePolicy::default().masking_markers,
        }
    }
}

impl Config {
    /// Load a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }

    /// Load from an explicit path, else the default location.
    ///
    /// A missing default file means built-in defaults; an explicit path must exist.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn labels(&self) -> MediaLabels {
        let mut labels = MediaLabels::for_locale(self.locale);
        let o = &self.labels;
        for (slot, value) in [
            (&mut labels.image, &o.image),
            (&mut labels.video, &o.video),
            (&mut labels.audio, &o.audio),
            (&mut labels.document, &o.document),
            (&mut labels.sticker, &o.sticker),
            (&mut labels.unknown, &o.unknown),
        ] {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        labels
    }

    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            labels: self.labels(),
            display_names: DisplayNamePolicy {
                masking_markers: self.masking_markers.clone(),
            },
        }
    }
}
