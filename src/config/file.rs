//! Configuration file support.
//!
//! A TOML file can provide defaults for every option. It is only read when its
//! path is passed explicitly with `--config`; the tool never looks for
//! configuration on its own.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! dir = "~/docs/build/html"
//! output = "~/docs/build/html/versions.json"
//! mode = "strict"
//! pretty = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::ParseMode;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can tell which values are present in the
/// file and apply layered configuration.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default directory to scan
    pub dir: Option<PathBuf>,

    /// Default manifest path
    pub output: Option<PathBuf>,

    /// Default parsing policy (`"tolerant"` or `"strict"`)
    pub mode: Option<ParseMode>,

    /// Whether to pretty-print the manifest
    pub pretty: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (including when it doesn't exist, since it was
    ///   requested explicitly)
    /// - The file contains invalid TOML or unexpected fields
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let path = expand_tilde(path);

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }

    /// The configured scan root with `~` expanded.
    #[must_use]
    pub fn dir(&self) -> Option<PathBuf> {
        self.dir.as_deref().map(expand_tilde)
    }

    /// The configured manifest path with `~` expanded.
    #[must_use]
    pub fn output(&self) -> Option<PathBuf> {
        self.output.as_deref().map(expand_tilde)
    }
}
