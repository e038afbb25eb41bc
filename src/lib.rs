//! # permsnap Core Library
//!
//! This crate provides the core functionality for the `permsnap` tool.
//!
//! It is designed to be used by the `permsnap` command-line application, but its public API
//! can also be used to programmatically snapshot the POSIX permission bits of a directory
//! tree into a JSON record file and later apply such a file back onto the tree.
//!
//! ## Key Modules
//!
//! - [`paths`]: Resolves user-supplied paths and validates backup destinations.
//! - [`perms`]: Converts between numeric permission triads and their `rwx` rendering.
//! - [`record`]: Defines the on-disk record shape shared by both operations.
//! - [`backup`]: Walks a directory tree and writes the snapshot.
//! - [`restore`]: Reads a snapshot and reapplies the recorded permissions.

pub mod backup;
pub mod cli;
pub mod error;
pub mod paths;
pub mod perms;
pub mod record;
pub mod restore;

pub use error::PermsnapError;

// Cross-platform filesystem wrapper
pub mod fsx;
