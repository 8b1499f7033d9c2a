/// Path normalization for the payload's `exe` and `cwd` fields.
///
/// Normalization is purely lexical: `.` components are dropped and `..`
/// pops the previous component. Symlinks are not resolved and nothing is
/// required to exist, except for the absolute-executable check in
/// [`resolve_exe`].
use std::path::{Component, Path, PathBuf};

use super::errors::LaunchError;

/// Make `path` absolute against `base` and collapse `.` / `..`.
#[must_use]
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                out.push(component.as_os_str());
            }
            Component::CurDir => {}
            // `pop` is a no-op at the root, so `/..` stays `/`.
            Component::ParentDir => {
                out.pop();
            }
        }
    }
    out
}

/// Resolve the working directory: the explicit `--cwd` value, or the
/// current directory.
///
/// `current` is only called when `explicit` is missing or relative, so an
/// absolute `--cwd` works even when the process directory is gone.
///
/// # Errors
///
/// - `LaunchError::CurrentDir` if `current` is needed and fails
/// - `LaunchError::InvalidUnicode` if the result is not valid UTF-8
pub fn resolve_cwd<F>(explicit: Option<&Path>, current: F) -> Result<String, LaunchError>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    let cwd = match explicit {
        Some(dir) if dir.is_absolute() => normalize(dir),
        Some(dir) => absolutize(dir, &current().map_err(LaunchError::CurrentDir)?),
        None => normalize(&current().map_err(LaunchError::CurrentDir)?),
    };
    path_to_string(cwd)
}

/// Resolve the executable path.
///
/// Rooted paths are normalized and must exist. On Windows this includes
/// drive-less paths like `\tools\app.exe`. Relative paths are returned as
/// given; the editor resolves them against the payload's `cwd`.
///
/// # Errors
///
/// - `LaunchError::ExecutableNotFound` for a missing rooted path
/// - `LaunchError::InvalidUnicode` if the normalized path is not UTF-8
pub fn resolve_exe(exe: &str) -> Result<String, LaunchError> {
    let path = Path::new(exe);
    if !path.has_root() {
        return Ok(exe.to_owned());
    }

    let resolved = path_to_string(normalize(path))?;
    if Path::new(&resolved).exists() {
        Ok(resolved)
    } else {
        Err(LaunchError::ExecutableNotFound { path: resolved })
    }
}

fn path_to_string(path: PathBuf) -> Result<String, LaunchError> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| LaunchError::InvalidUnicode(raw.to_string_lossy().into_owned()))
}
