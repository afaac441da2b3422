//! Per-group check symbols
//!
//! Every group ends in a check symbol derived from its three data symbols
//! and its position in the code: the fold starts at the group's 0-based
//! ordinal and steps through `acc = (acc * 19 + symbol) mod 31`. Seeding
//! with the ordinal alone (never with neighbouring groups) is what lets a
//! prefix of a longer code be verified on its own, while still pinning each
//! group to its slot. 19 and its powers are invertible mod 31, so moving a
//! group to a nearby slot or editing a single symbol shifts the expected
//! check symbol.
//!
//! Folding a 32-symbol alphabet modulo the prime 31 has one wrinkle: the
//! symbols at index 0 (`0`) and 31 (`Y`) share a residue. Swapping one for
//! the other in a data position goes undetected, and `Y` never appears as a
//! check symbol.

use crate::alphabet::SYMBOLS;

/// Fold multiplier; invertible mod [`CHECK_MODULUS`]
const FOLD_MULTIPLIER: usize = 19;

/// Check values are reduced modulo this prime, not the alphabet size
const CHECK_MODULUS: usize = 31;

/// Compute the check symbol index for the group at `ordinal` (0-based)
///
/// `data` holds the group's data symbol indices. The result is always
/// below 31, so `Y` (index 31) cannot be produced.
#[must_use]
pub fn check_index(ordinal: usize, data: &[u8]) -> u8 {
    let mut acc = ordinal % CHECK_MODULUS;
    for &d in data {
        acc = (acc * FOLD_MULTIPLIER + usize::from(d)) % CHECK_MODULUS;
    }
    acc as u8
}

/// Compute the check symbol character for the group at `ordinal`
#[must_use]
pub fn check_symbol(ordinal: usize, data: &[u8]) -> char {
    char::from(SYMBOLS[usize::from(check_index(ordinal, data))])
}

/// Whether a full group of symbol indices is internally consistent at
/// `ordinal`
///
/// `group` must hold [`crate::GROUP_LEN`] indices, data symbols first.
#[must_use]
pub fn verify_group(ordinal: usize, group: &[u8]) -> bool {
    group.len() == crate::GROUP_LEN
        && check_index(ordinal, &group[..crate::DATA_LEN]) == group[crate::DATA_LEN]
}
