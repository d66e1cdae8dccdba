pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use read_settings::{load_settings, parse_settings};

use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::{Result, RewriteError};

/// Alias marker used by the default project layout (`@/components/...`).
pub const DEFAULT_ALIAS: &str = "@/";
/// Directory the alias marker stands for, relative to the project root.
pub const DEFAULT_ALIAS_ROOT: &str = "src";
/// Top-level directories scanned by default.
pub const DEFAULT_DIRS: [&str; 2] = ["app", "src"];
/// Extensions rewritten by default: two script and two script-with-markup kinds.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["ts", "tsx", "js", "jsx"];

/// What to rewrite and where to look.
///
/// Every field is optional in a settings file; missing fields fall back to
/// the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Prefix marking an aliased import target.
    pub alias: String,
    /// Directory the alias resolves to, relative to the project root.
    pub alias_root: PathBuf,
    /// Top-level directories (relative to the project root) to scan.
    pub dirs: Vec<String>,
    /// File extensions to rewrite, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            alias: DEFAULT_ALIAS.to_string(),
            alias_root: PathBuf::from(DEFAULT_ALIAS_ROOT),
            dirs: DEFAULT_DIRS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Normalise extensions (`.ts` becomes `ts`) and reject
    /// settings that could never match anything.
    pub fn validated(mut self) -> Result<Self> {
        if self.alias.is_empty() {
            return Err(RewriteError::settings("alias marker must not be empty"));
        }
        self.extensions = self
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if self.extensions.is_empty() {
            return Err(RewriteError::settings("at least one extension is required"));
        }
        self.dirs.retain(|d| !d.trim().is_empty());
        if self.dirs.is_empty() {
            return Err(RewriteError::settings("at least one directory is required"));
        }
        Ok(self)
    }

    /// Whether `ext` (without dot) is on the allow-list. Case matters:
    /// `TS` is not `ts`.
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}
