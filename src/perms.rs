//! Symbolic permission codec.
//!
//! One permission class (owner, group, or other) is a 3-bit triad: bit 2 is
//! read, bit 1 is write, bit 0 is execute. This module renders a triad as the
//! familiar `rwx` string, converts such strings back to bits, and packs the
//! three class triads into the 9-bit mode value passed to chmod.

use crate::error::PermsnapError;

/// Renders a single permission triad (0..=7) as its 3-character `rwx` form.
///
/// Position 0 carries the read capability, position 1 write, position 2
/// execute; an absent capability is rendered as `-`.
pub fn to_symbolic(triad: u32) -> String {
    let mut chars = ['-', '-', '-'];
    if triad & 4 != 0 {
        chars[0] = 'r';
    }
    if triad & 2 != 0 {
        chars[1] = 'w';
    }
    if triad & 1 != 0 {
        chars[2] = 'x';
    }
    chars.iter().collect()
}

/// Checks that `sym` is exactly 3 characters, each one of `r`, `w`, `x`, `-`.
///
/// Any of the four symbols is accepted in any position; record files written
/// by older tools carry the same loose format.
pub fn validate(sym: &str) -> Result<(), PermsnapError> {
    let well_formed =
        sym.chars().count() == 3 && sym.chars().all(|c| matches!(c, 'r' | 'w' | 'x' | '-'));
    if well_formed {
        Ok(())
    } else {
        Err(PermsnapError::InvalidPermissionFormat {
            value: sym.to_string(),
        })
    }
}

/// Converts a symbolic triad back to its numeric value.
///
/// The mapping is positional: any non-`-` character in the read, write, or
/// execute slot sets that slot's bit, so the result is always 0..=7.
pub fn to_numeric(sym: &str) -> Result<u32, PermsnapError> {
    validate(sym)?;
    let mut triad = 0;
    for (pos, c) in sym.chars().enumerate() {
        if c != '-' {
            triad |= 4 >> pos;
        }
    }
    Ok(triad)
}

/// Packs the three class triads into one 9-bit mode value.
pub fn combine(user: u32, group: u32, other: u32) -> u32 {
    (user << 6) | (group << 3) | other
}

/// Splits a raw mode into its user, group, and other triads, discarding any
/// file-type bits above the low 9.
pub fn mode_triads(mode: u32) -> (u32, u32, u32) {
    ((mode >> 6) & 7, (mode >> 3) & 7, mode & 7)
}
