use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while scanning and rewriting a source tree.
///
/// Any I/O failure aborts the whole run; there is no skip-and-continue.
/// A file without alias imports, or a target without the alias marker, is
/// not an error and never reaches this type.
#[derive(Error, Debug)]
pub enum RewriteError {
    /// The file could not be read (missing, unreadable, or not UTF-8).
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rewritten content could not be written back.
    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The import pattern built from the alias marker did not compile.
    #[error("invalid import pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Settings were loaded but are unusable.
    #[error("invalid settings{}: {msg}", in_file(.path))]
    Settings { path: Option<PathBuf>, msg: String },
}

impl RewriteError {
    pub(crate) fn settings(msg: impl Into<String>) -> Self {
        RewriteError::Settings {
            path: None,
            msg: msg.into(),
        }
    }
}

fn in_file(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in `{}`", p.display()))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, RewriteError>;
