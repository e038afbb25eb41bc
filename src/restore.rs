//! Restore path: load a snapshot file and reapply the recorded permissions.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::PermsnapError;
use crate::record::{PermissionRecord, PermissionSet};
use crate::{fsx, paths, perms};

/// Reads and parses a record file produced by a previous backup.
///
/// Accepts any valid JSON of the record shape, indented or compact.
pub fn load_records(path: &Path) -> Result<PermissionSet, PermsnapError> {
    let data = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PermsnapError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PermsnapError::Access {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(serde_json::from_slice(&data)?)
}

/// Computes the 9-bit mode a record asks for, validating its three symbolic
/// strings first.
fn record_mode(record: &PermissionRecord) -> Result<u32, PermsnapError> {
    let user = perms::to_numeric(&record.user)?;
    let group = perms::to_numeric(&record.group)?;
    let other = perms::to_numeric(&record.other)?;
    Ok(perms::combine(user, group, other))
}

/// Applies recorded permissions back to disk.
///
/// Two passes. The first validates every record and stats every target
/// without touching anything, so a malformed record or a missing path is
/// reported before a single permission has changed. The second pass issues
/// the chmods in record order and stops at the first failure; entries already
/// applied at that point stay applied.
pub fn apply(records: &[PermissionRecord]) -> Result<(), PermsnapError> {
    let mut modes = Vec::with_capacity(records.len());
    for record in records {
        let mode = record_mode(record)?;
        match fs::metadata(&record.path) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PermsnapError::TargetMissing {
                    path: record.path.clone(),
                })
            }
            Err(source) => {
                return Err(PermsnapError::Access {
                    path: record.path.clone(),
                    source,
                })
            }
        }
        modes.push(mode);
    }

    for (record, mode) in records.iter().zip(modes) {
        fsx::set_unix_permissions(&record.path, mode).map_err(|source| {
            PermsnapError::Access {
                path: record.path.clone(),
                source,
            }
        })?;
        debug!(path = %record.path.display(), mode, "permissions applied");
    }

    Ok(())
}

/// Runs the restore operation end to end.
///
/// The record file is read in full before any filesystem mutation begins.
pub fn restore_permissions(target: &str, backup_file: &str) -> Result<(), PermsnapError> {
    let input = paths::resolve(backup_file, true)?;
    let root = paths::resolve(target, true)?;
    paths::ensure_directory(&root)?;

    info!(
        directory = %root.display(),
        input = %input.display(),
        "restoring permissions"
    );

    let records = load_records(&input)?;
    apply(&records)?;
    debug!(entries = records.len(), "restore complete");

    Ok(())
}
