use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components without touching the filesystem.
///
/// Leading `..` components of a relative path are kept; `..` directly under
/// the root is dropped (`/..` is `/`). An input that reduces to nothing
/// yields an empty `PathBuf`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Path of `target` relative to the directory `base`, purely lexically.
///
/// Returns `None` when the answer depends on where the two paths live on
/// disk: one is absolute and the other is not, they sit on different
/// prefixes, or `base` climbs above the shared part with `..`.
pub fn diff_lexically(target: &Path, base: &Path) -> Option<PathBuf> {
    if target.is_absolute() != base.is_absolute() {
        return None;
    }
    let target = normalize_lexically(target);
    let base = normalize_lexically(base);
    let t: Vec<Component<'_>> = target.components().collect();
    let b: Vec<Component<'_>> = base.components().collect();

    let common = t.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let mut rel = PathBuf::new();
    for comp in &b[common..] {
        match comp {
            Component::Normal(_) => rel.push(".."),
            _ => return None,
        }
    }
    for comp in &t[common..] {
        match comp {
            Component::Prefix(_) | Component::RootDir => return None,
            other => rel.push(other),
        }
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Some(rel)
}

/// Path of `target` relative to the directory `base`.
///
/// Lexical first; when that is not possible both sides are anchored at the
/// current working directory. If even that fails (different drives) the
/// normalised absolute target is returned.
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    if let Some(rel) = diff_lexically(target, base) {
        return rel;
    }
    match std::env::current_dir() {
        Ok(cwd) => {
            let target = cwd.join(target);
            diff_lexically(&target, &cwd.join(base)).unwrap_or_else(|| normalize_lexically(&target))
        }
        Err(_) => normalize_lexically(target),
    }
}

/// Render `path` with `/` separators regardless of the host convention.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
