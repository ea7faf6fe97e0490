use std::path::{Component, Path, PathBuf};

use pathdiff::diff_paths;

/// Express `path` relative to `base`, the way `url()` values expect it.
///
/// Relative inputs are taken to be relative to `base` already. Returns `None`
/// when no relative form exists, e.g. the two live under different drive
/// prefixes.
pub fn relative_path(path: &Path, base: &Path) -> Option<PathBuf> {
    let absolute = normalize(&base.join(path));
    let base = normalize(base);

    let relative = diff_paths(&absolute, &base)?;
    if relative.has_root() || relative.components().any(|c| matches!(c, Component::Prefix(_))) {
        return None;
    }

    if relative.as_os_str().is_empty() {
        Some(PathBuf::from("."))
    } else {
        Some(relative)
    }
}

/// Lexically drop `.` and resolve `..` against preceding components
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    parts.iter().collect()
}

/// Render a path with forward slashes regardless of the host separator
pub fn to_url_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
