//! Record types shared by the backup and restore paths.

use serde::{Deserialize, Serialize};

/// Entry classification captured at snapshot time. Informational on restore;
/// the same chmod is issued for both kinds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// The permissions of a single file or directory entry within a snapshot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PermissionRecord {
    pub path: std::path::PathBuf, // Absolute path of the file or directory
    #[serde(rename = "type")]
    pub kind: EntryKind, // "file" or "directory"
    pub user: String,  // User permissions (rwx)
    pub group: String, // Group permissions (rwx)
    pub other: String, // Other permissions (rwx)
    #[serde(rename = "isDirectory")]
    pub is_directory: bool, // Kept alongside `kind` for record-file compatibility
}

/// One full snapshot: records in traversal order.
pub type PermissionSet = Vec<PermissionRecord>;
