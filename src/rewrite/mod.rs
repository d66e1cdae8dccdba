//! Rewriting aliased imports inside one file.
//!
//! [`Rewriter::rewrite_content`] is the pure text transform;
//! [`Rewriter::rewrite_file`] wraps it with the read and the conditional
//! write-back.

pub mod file;
pub mod imports;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::alias::AliasResolver;
use crate::errors::{Result, RewriteError};
use crate::settings::Settings;
pub use imports::{ImportPattern, ImportRef};

/// One rewritten import occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub from: String,
    pub to: String,
}

/// Result of rewriting one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub changes: Vec<Change>,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Whether [`Rewriter::rewrite_file`] persists its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    DryRun,
}

/// What happened to one file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub changes: Vec<Change>,
    /// `true` only when new content was actually written.
    pub written: bool,
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Rewriter {
    resolver: AliasResolver,
    pattern: ImportPattern,
}

impl Rewriter {
    /// Fails on an empty marker, which would match every `from '...'`.
    pub fn new(resolver: AliasResolver) -> Result<Self> {
        if resolver.marker().is_empty() {
            return Err(RewriteError::settings("alias marker must not be empty"));
        }
        let pattern = ImportPattern::new(resolver.marker())?;
        Ok(Rewriter { resolver, pattern })
    }

    pub fn from_settings(settings: &Settings, project_root: &Path) -> Result<Self> {
        Rewriter::new(AliasResolver::from_settings(settings, project_root))
    }

    /// Rewrite every aliased import in `content` as seen from `file_path`.
    ///
    /// Matches are taken from the original text in order. Each one replaces
    /// every occurrence of its raw text, so identical import statements are
    /// rewritten together; later duplicates still record a change.
    pub fn rewrite_content(&self, file_path: &Path, content: &str) -> Rewrite {
        let mut updated = content.to_string();
        let mut changes = Vec::new();

        for import in self.pattern.find_all(content) {
            let resolved = self.resolver.resolve(file_path, &import.target);
            if resolved == import.target {
                continue;
            }
            let new_import = import.raw.replace(&import.target, &resolved);
            updated = updated.replace(&import.raw, &new_import);
            changes.push(Change {
                from: import.target,
                to: resolved,
            });
        }

        Rewrite {
            content: updated,
            changes,
        }
    }

    /// Read `path`, rewrite it, and write it back only if something changed.
    pub fn rewrite_file(&self, path: &Path, mode: WriteMode) -> Result<FileOutcome> {
        let content = file::read_source(path)?;
        let rewrite = self.rewrite_content(path, &content);

        let written = rewrite.changed() && mode == WriteMode::Write;
        if written {
            file::write_source(path, &rewrite.content)?;
            info!(path = %path.display(), imports = rewrite.changes.len(), "rewrote imports");
        } else if rewrite.changed() {
            debug!(path = %path.display(), imports = rewrite.changes.len(), "dry run, not writing");
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            changes: rewrite.changes,
            written,
        })
    }
}
