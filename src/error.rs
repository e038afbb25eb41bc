use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in the `permsnap` crate.
#[derive(Debug, Error)]
pub enum PermsnapError {
    /// The user's home directory could not be determined while expanding a
    /// leading `~`.
    #[error("unable to determine home directory")]
    HomeResolution,

    /// No filesystem entry exists at the resolved path.
    #[error("file or directory does not exist: '{}'", .path.display())]
    NotFound { path: PathBuf },

    /// A stat or I/O failure other than a plain "does not exist".
    #[error("error accessing '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry exists but is not a directory.
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The parent directory of a backup destination is missing or not a directory.
    #[error("invalid parent directory: '{}'", .path.display())]
    InvalidParent { path: PathBuf },

    /// An entry already exists at the backup destination; it is never overwritten.
    #[error("file '{}' already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    /// A symbolic permission string is not exactly 3 characters drawn from `rwx-`.
    #[error("invalid permission string: '{value}'")]
    InvalidPermissionFormat { value: String },

    /// The directory walk hit an entry it could not read.
    #[error("error walking the directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// A record's path no longer exists on disk at restore time.
    #[error("file or directory '{}' does not exist", .path.display())]
    TargetMissing { path: PathBuf },

    /// The record file could not be encoded or decoded.
    #[error("record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backup output file could not be written.
    #[error("error writing '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
