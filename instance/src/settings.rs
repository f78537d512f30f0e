//! Deployment settings.
//!
//! Settings are read from a TOML file; every key is optional and falls back
//! to the default shown on [`Settings`].
//!
//! ```toml
//! ruleset_uri = "http://semantica.globo.com/ruleset"
//! default_lang = "pt"
//! index_prefix = "semantica"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading [`Settings`].
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings file {path}")]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`Settings`].
    #[error("Invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Instance compiler settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Inference ruleset that materializes super-properties.
    pub ruleset_uri: String,
    /// Language used to filter literals when a request names none.
    pub default_lang: String,
    /// Prefix of search index names (`<index_prefix>.<graph slug>`).
    pub index_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ruleset_uri: "http://semantica.globo.com/ruleset".to_owned(),
            default_lang: "pt".to_owned(),
            index_prefix: "semantica".to_owned(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for invalid TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] when the file cannot be read and
    /// [`SettingsError::Parse`] when it is not valid.
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
