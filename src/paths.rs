//! Path resolution and validation.
//!
//! Every user-supplied path flows through [`resolve`] before any filesystem
//! work happens: a leading `~` is expanded to the invoking user's home
//! directory and the result is absolutized lexically, without following
//! symlinks and without requiring the path to exist.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PermsnapError;

/// Expands a leading `~` or `~/` to the user's home directory.
fn expand_home(path: &str) -> Result<PathBuf, PermsnapError> {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = home::home_dir().ok_or(PermsnapError::HomeResolution)?;
        return Ok(home.join(rest));
    }
    if path == "~" {
        return home::home_dir().ok_or(PermsnapError::HomeResolution);
    }
    Ok(PathBuf::from(path))
}

/// Resolves `path` to a canonical absolute path.
///
/// When `must_exist` is true the resolved path is stat'ed once; a missing
/// entry is reported as [`PermsnapError::NotFound`], any other stat failure
/// as [`PermsnapError::Access`].
pub fn resolve(path: &str, must_exist: bool) -> Result<PathBuf, PermsnapError> {
    let expanded = expand_home(path)?;
    let abs = std::path::absolute(&expanded).map_err(|source| PermsnapError::Access {
        path: expanded.clone(),
        source,
    })?;

    if must_exist {
        match fs::metadata(&abs) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PermsnapError::NotFound { path: abs })
            }
            Err(source) => return Err(PermsnapError::Access { path: abs, source }),
        }
    }

    Ok(abs)
}

/// Confirms that `path` is an existing directory.
pub fn ensure_directory(path: &Path) -> Result<(), PermsnapError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PermsnapError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(PermsnapError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(PermsnapError::Access {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Validates a backup destination before anything is written.
///
/// The parent directory must already exist as a directory, and nothing may
/// exist at the destination itself: an existing snapshot is never silently
/// overwritten.
pub fn validate_output_path(path: &Path) -> Result<(), PermsnapError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    match fs::metadata(&parent) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(PermsnapError::InvalidParent { path: parent }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PermsnapError::InvalidParent { path: parent })
        }
        Err(source) => {
            return Err(PermsnapError::Access {
                path: parent,
                source,
            })
        }
    }

    match fs::symlink_metadata(path) {
        Ok(_) => Err(PermsnapError::AlreadyExists {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(PermsnapError::Access {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn resolve_absolutizes_relative_paths() {
        let abs = resolve("some/relative/path", false).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/relative/path"));
    }

    #[test]
    fn resolve_expands_tilde_prefix() {
        let Some(home) = home::home_dir() else {
            return;
        };
        assert_eq!(resolve("~", false).unwrap(), home);
        assert_eq!(resolve("~/projects", false).unwrap(), home.join("projects"));
    }

    #[test]
    fn resolve_missing_path_fails_when_existence_required() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = resolve(missing.to_str().unwrap(), true).unwrap_err();
        assert!(matches!(err, PermsnapError::NotFound { .. }));
    }

    #[test]
    fn resolve_existing_path_passes_existence_check() {
        let dir = tempdir().unwrap();
        let resolved = resolve(dir.path().to_str().unwrap(), true).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn ensure_directory_accepts_directories_only() {
        let dir = tempdir().unwrap();
        assert!(ensure_directory(dir.path()).is_ok());

        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            ensure_directory(&file),
            Err(PermsnapError::NotADirectory { .. })
        ));

        assert!(matches!(
            ensure_directory(&dir.path().join("absent")),
            Err(PermsnapError::NotFound { .. })
        ));
    }

    #[test]
    fn validate_output_accepts_fresh_destination() {
        let dir = tempdir().unwrap();
        assert!(validate_output_path(&dir.path().join("backup.json")).is_ok());
    }

    #[test]
    fn validate_output_rejects_existing_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("backup.json");
        fs::write(&out, "[]").unwrap();
        let err = validate_output_path(&out).unwrap_err();
        assert!(matches!(err, PermsnapError::AlreadyExists { .. }));
    }

    #[test]
    fn validate_output_rejects_missing_parent() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("no-such-dir").join("backup.json");
        let err = validate_output_path(&out).unwrap_err();
        assert!(matches!(err, PermsnapError::InvalidParent { .. }));
    }

    #[test]
    fn validate_output_rejects_file_parent() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        let err = validate_output_path(&file.join("backup.json")).unwrap_err();
        assert!(matches!(err, PermsnapError::InvalidParent { .. }));
    }
}
