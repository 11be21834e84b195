//! CLI settings
//!
//! Letterhead configuration for the export commands, loaded from a
//! `campusdoc.toml` file:
//!
//! ```toml
//! [letterhead]
//! name = "CITY COLLEGE OF SCIENCE"
//! affiliation = "(Affiliated to the State University)"
//!
//! [logo]
//! path = "assets/logo.png"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use campusdoc_ast::{Letterhead, Logo};
use serde::{Deserialize, Serialize};

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Institution letterhead fields; blanks fall back to fixed defaults
    pub letterhead: Letterhead,
    /// Logo settings
    pub logo: LogoSettings,
}

/// Logo configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogoSettings {
    /// Path to a PNG or JPEG logo file
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Build the letterhead for a render call, loading the logo bytes.
    ///
    /// A missing or unreadable logo file degrades to "no logo" with a
    /// warning; it is never an error.
    pub fn resolve_letterhead(&self) -> Letterhead {
        let mut letterhead = self.letterhead.clone();
        if let Some(path) = &self.logo.path {
            match fs::read(path) {
                Ok(bytes) => letterhead.logo = Some(Logo { bytes }),
                Err(err) => {
                    log::warn!(
                        "logo {} could not be read, rendering without it: {}",
                        path.display(),
                        err
                    );
                }
            }
        }
        letterhead
    }
}

/// Load settings from an explicit config path, or search the usual
/// locations, or fall back to defaults
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)?;
            Settings::from_toml_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
        }
        None => {
            let candidates = ["campusdoc.toml", ".campusdoc.toml"];
            for candidate in candidates {
                let path = Path::new(candidate);
                if path.exists() {
                    if let Some(settings) = read_discovered(path) {
                        return Ok(settings);
                    }
                }
            }
            Ok(Settings::default())
        }
    }
}

/// Read a discovered (non-explicit) config file. An unreadable or
/// malformed file is warned about and skipped so the command still runs
/// with defaults; only an explicit `--config` path is a hard error.
fn read_discovered(path: &Path) -> Option<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("could not read {}, skipping it: {}", path.display(), err);
            return None;
        }
    };
    match Settings::from_toml_str(&content) {
        Ok(settings) => Some(settings),
        Err(err) => {
            log::warn!("ignoring malformed {}: {}", path.display(), err);
            None
        }
    }
}
