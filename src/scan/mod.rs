//! Tree driver: find candidate files under the project root and run the
//! rewriter over each of them, one at a time.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::Result;
use crate::rewrite::{FileOutcome, Rewriter, WriteMode};
use crate::settings::Settings;

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files_scanned: usize,
    /// Files with at least one rewritten import (written, or would be in a dry run).
    pub files_modified: usize,
    pub imports_rewritten: usize,
}

impl Summary {
    fn record(&mut self, outcome: &FileOutcome) {
        self.files_scanned += 1;
        if outcome.changed() {
            self.files_modified += 1;
            self.imports_rewritten += outcome.changes.len();
        }
    }
}

/// Files under `root` that the settings select, sorted by path within each
/// configured directory.
///
/// Configured directories that do not exist are skipped silently. Symlinked
/// files are selected like regular ones; symlinked directories are not
/// descended into.
pub fn collect_source_files(root: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in &settings.dirs {
        let base = root.join(dir);
        if !base.is_dir() {
            debug!(dir = %base.display(), "directory not present, skipping");
            continue;
        }
        for entry in WalkDir::new(&base).follow_links(false).sort_by_file_name() {
            let entry = entry?;
            let ft = entry.file_type();
            let is_file = ft.is_file() || (ft.is_symlink() && entry.path().is_file());
            if !is_file {
                if ft.is_symlink() {
                    debug!(path = %entry.path().display(), "not following symlink");
                }
                continue;
            }
            let allowed = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| settings.allows_extension(e));
            if allowed {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

/// Rewrite every selected file under `root`.
///
/// `on_file` sees each outcome as soon as its file is done, so progress can
/// be reported while the walk continues. Settings are validated first; the
/// first I/O error stops the run.
pub fn run<F>(root: &Path, settings: &Settings, mode: WriteMode, mut on_file: F) -> Result<Summary>
where
    F: FnMut(&FileOutcome),
{
    let settings = settings.clone().validated()?;
    let rewriter = Rewriter::from_settings(&settings, root)?;
    let mut summary = Summary::default();

    for path in collect_source_files(root, &settings)? {
        debug!(path = %path.display(), "scanning");
        let outcome = rewriter.rewrite_file(&path, mode)?;
        summary.record(&outcome);
        on_file(&outcome);
    }

    Ok(summary)
}
