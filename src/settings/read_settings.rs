use std::fs;
use std::path::Path;

use super::Settings;
use crate::errors::{Result, RewriteError};

/// Load and validate settings from a TOML file.
///
/// ```toml
/// alias = "~/"
/// alias_root = "lib"
/// dirs = ["pages", "lib"]
/// extensions = ["ts", "vue"]
/// ```
pub fn load_settings(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&text).map_err(|e| match e {
        RewriteError::Settings { msg, .. } => RewriteError::Settings {
            path: Some(path.to_path_buf()),
            msg,
        },
        other => other,
    })
}

/// Parse and validate settings from TOML text.
pub fn parse_settings(text: &str) -> Result<Settings> {
    let settings: Settings =
        toml::from_str(text).map_err(|e| RewriteError::settings(e.message().to_string()))?;
    settings.validated()
}
