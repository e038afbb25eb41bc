//! Backup path: walk a directory tree and write the snapshot file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::PermsnapError;
use crate::record::{EntryKind, PermissionRecord, PermissionSet};
use crate::{fsx, paths, perms};

/// Walks the tree rooted at `root` and snapshots one record per entry.
///
/// The root itself is visited first; children follow depth-first in name
/// order, so record order is reproducible on an unchanged tree. Symlinks are
/// not followed: an encountered link is recorded with its own metadata and
/// classified as a file. Any entry that cannot be read aborts the whole walk;
/// no partial snapshot is returned.
pub fn walk_tree(root: &Path) -> Result<PermissionSet, PermsnapError> {
    let mut records = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let meta = entry.metadata()?;
        let (user, group, other) = perms::mode_triads(fsx::entry_mode(&meta));
        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        records.push(PermissionRecord {
            path: entry.path().to_path_buf(),
            kind,
            user: perms::to_symbolic(user),
            group: perms::to_symbolic(group),
            other: perms::to_symbolic(other),
            is_directory: meta.is_dir(),
        });
    }
    Ok(records)
}

/// Runs the backup operation end to end.
///
/// The destination is validated before anything else happens, so a failed
/// backup can never leave a truncated or overwritten output file behind.
pub fn backup_permissions(target: &str, backup_file: &str) -> Result<(), PermsnapError> {
    let output = paths::resolve(backup_file, false)?;
    paths::validate_output_path(&output)?;

    let root = paths::resolve(target, true)?;
    paths::ensure_directory(&root)?;

    info!(
        directory = %root.display(),
        output = %output.display(),
        "backing up permissions"
    );

    let records = walk_tree(&root)?;
    debug!(entries = records.len(), "tree walk complete");

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(&output, json).map_err(|source| PermsnapError::Write {
        path: output.clone(),
        source,
    })?;

    Ok(())
}
