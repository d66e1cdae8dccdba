use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::{Result, RewriteError};

/// Read a source file fully into memory.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of `path` with `content`.
pub fn write_source(path: &Path, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes()).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `data` to `target` through a temporary sibling file and a rename,
/// so a failed write never leaves a truncated source file behind. The
/// permissions of an existing `target` carry over to the new file.
///
/// A symlinked `target` is written through: the file it points at is
/// replaced and the link stays. A `target` the caller may not open for
/// writing fails with the error that open returns, even when its directory
/// would allow the rename.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let resolved;
    let target = if fs::symlink_metadata(target).is_ok_and(|m| m.file_type().is_symlink()) {
        resolved = fs::canonicalize(target)?;
        resolved.as_path()
    } else {
        target
    };
    ensure_writable(target)?;

    let dir = match target.parent() {
        Some(d) if d.as_os_str().is_empty() => Path::new("."),
        Some(d) => d,
        // no parent: write directly
        None => return fs::write(target, data),
    };
    let tmp = dir.join(format!(".aliasfix.tmp.{}", unique_suffix()));
    let perms = fs::metadata(target).ok().map(|m| m.permissions());

    let result = fs::write(&tmp, data)
        .and_then(|()| match perms {
            Some(p) => fs::set_permissions(&tmp, p),
            None => Ok(()),
        })
        .and_then(|()| fs::rename(&tmp, target));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

// Opening without truncation leaves content and mtime alone. A missing file
// is fine: the rename creates it.
fn ensure_writable(target: &Path) -> io::Result<()> {
    match fs::OpenOptions::new().write(true).open(target) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

// pid + clock + sequence; unique enough for one process rewriting one file
// at a time.
fn unique_suffix() -> String {
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seq = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{:x}{:x}{:x}", std::process::id(), nanos & 0xffff_ffff, seq)
}
