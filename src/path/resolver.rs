use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    PermissionDenied,
    IsDirectory,
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Denial::PermissionDenied => write!(f, "Permission denied"),
            Denial::IsDirectory => write!(f, "Is a directory"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(PathBuf),
    Denied(PathBuf, Denial),
    NotFound,
}

/// Whether the calling process may execute `path`, as `access(2)` with
/// `X_OK` reports it.
pub fn is_executable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

fn check_candidate(path: &Path) -> Resolution {
    match path.metadata() {
        Err(_) => Resolution::NotFound,
        Ok(meta) if meta.is_dir() => {
            Resolution::Denied(path.to_path_buf(), Denial::IsDirectory)
        }
        Ok(_) if is_executable(path) => Resolution::Found(path.to_path_buf()),
        Ok(_) => Resolution::Denied(path.to_path_buf(), Denial::PermissionDenied),
    }
}

/// Finds the program `name` refers to.
///
/// A name containing `/` is checked as a path. Otherwise each `PATH`
/// directory is tried in order, an empty entry meaning the current
/// directory. The first executable regular file wins; if only
/// non-executable candidates exist, the first of those is reported.
pub fn resolve_command(name: &str, path_var: Option<&str>) -> Resolution {
    if name.is_empty() {
        return Resolution::NotFound;
    }

    if name.contains('/') {
        return check_candidate(Path::new(name));
    }

    let Some(path_var) = path_var else {
        return Resolution::NotFound;
    };

    let mut denied = None;
    for dir in path_var.split(':') {
        let candidate = if dir.is_empty() {
            PathBuf::from(name)
        } else {
            Path::new(dir).join(name)
        };

        match check_candidate(&candidate) {
            Resolution::Found(path) => return Resolution::Found(path),
            Resolution::Denied(path, Denial::PermissionDenied) if denied.is_none() => {
                denied = Some(path);
            }
            _ => {}
        }
    }

    match denied {
        Some(path) => Resolution::Denied(path, Denial::PermissionDenied),
        None => Resolution::NotFound,
    }
}
