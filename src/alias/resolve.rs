use std::path::{Path, PathBuf};

use super::path::{relative_path, to_forward_slashes};
use crate::settings::Settings;

/// Maps alias-prefixed import targets onto paths relative to the importing
/// file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasResolver {
    marker: String,
    alias_dir: PathBuf,
}

impl AliasResolver {
    /// `alias_dir` is the directory `marker` stands for, expressed the same
    /// way (relative or absolute) as the file paths later passed to
    /// [`resolve`](Self::resolve).
    pub fn new(marker: impl Into<String>, alias_dir: impl Into<PathBuf>) -> Self {
        AliasResolver {
            marker: marker.into(),
            alias_dir: alias_dir.into(),
        }
    }

    /// Resolver for a project rooted at `project_root`.
    pub fn from_settings(settings: &Settings, project_root: &Path) -> Self {
        AliasResolver::new(settings.alias.clone(), project_root.join(&settings.alias_root))
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn is_aliased(&self, target: &str) -> bool {
        target.starts_with(&self.marker)
    }

    /// Rewrite `target` relative to the directory containing `from_file`.
    ///
    /// Targets without the alias marker come back unchanged. Resolution is
    /// lexical only; nothing is checked on disk. The result always uses `/`
    /// and is `./`-prefixed when it stays inside the importing directory, so
    /// it is never mistaken for a package name.
    pub fn resolve(&self, from_file: &Path, target: &str) -> String {
        let Some(rest) = target.strip_prefix(self.marker.as_str()) else {
            return target.to_string();
        };
        // `@` + `/x` must not turn into an absolute join.
        let rest = rest.trim_start_matches(['/', '\\']);
        let dest = self.alias_dir.join(rest);
        let from_dir = from_file.parent().unwrap_or_else(|| Path::new(""));

        dot_prefixed(to_forward_slashes(&relative_path(&dest, from_dir)))
    }
}

fn dot_prefixed(rel: String) -> String {
    if rel == "." || rel == ".." || rel.starts_with("../") || rel.starts_with('/') || has_drive(&rel) {
        rel
    } else {
        format!("./{rel}")
    }
}

fn has_drive(rel: &str) -> bool {
    let b = rel.as_bytes();
    b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':'
}

impl Default for AliasResolver {
    fn default() -> Self {
        AliasResolver::from_settings(&Settings::default(), Path::new(""))
    }
}
