//! The 32-symbol code alphabet
//!
//! Codes are written with digits and uppercase letters, minus the characters
//! people misread or mistype when copying a code from paper or a phone call:
//! `I` (vs `1`), `O` (vs `0`), `S` (vs `5`) and `Z` (vs `2`). Each symbol has
//! a fixed index from 0 to 31 that the checksum arithmetic works on.

/// The code alphabet, ordered by symbol index
pub const SYMBOLS: &[u8; 32] = b"0123456789ABCDEFGHJKLMNPQRTUVWXY";

/// Map a character to its symbol index
///
/// Lowercase input is folded to uppercase here, so callers never need to
/// case-normalize first. Returns `None` for anything outside the alphabet.
#[must_use]
pub fn symbol_to_index(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    let b = (c as u8).to_ascii_uppercase();
    SYMBOLS.iter().position(|&s| s == b).map(|i| i as u8)
}

/// Map a symbol index back to its character
#[must_use]
pub fn index_to_symbol(index: u8) -> Option<char> {
    SYMBOLS.get(usize::from(index)).map(|&b| char::from(b))
}

/// Whether `c` is a code symbol, in either case
#[must_use]
pub fn is_valid_symbol(c: char) -> bool {
    symbol_to_index(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_size() {
        assert_eq!(SYMBOLS.len(), 32);
    }

    #[test]
    fn test_ambiguous_characters_excluded() {
        for c in ['I', 'O', 'S', 'Z', 'i', 'o', 's', 'z'] {
            assert!(!is_valid_symbol(c), "{c:?} should not be a symbol");
        }
    }

    #[test]
    fn test_round_trip_all_symbols() {
        for (i, &b) in SYMBOLS.iter().enumerate() {
            let c = char::from(b);
            assert_eq!(symbol_to_index(c), Some(i as u8));
            assert_eq!(index_to_symbol(i as u8), Some(c));
        }
    }

    #[test]
    fn test_known_indices() {
        assert_eq!(symbol_to_index('0'), Some(0));
        assert_eq!(symbol_to_index('9'), Some(9));
        assert_eq!(symbol_to_index('A'), Some(10));
        assert_eq!(symbol_to_index('J'), Some(18));
        assert_eq!(symbol_to_index('P'), Some(23));
        assert_eq!(symbol_to_index('T'), Some(26));
        assert_eq!(symbol_to_index('Y'), Some(31));
    }

    #[test]
    fn test_lowercase_folds() {
        assert_eq!(symbol_to_index('a'), symbol_to_index('A'));
        assert_eq!(symbol_to_index('y'), Some(31));
    }

    #[test]
    fn test_non_ascii_rejected() {
        // U+0141 truncates to the byte for 'A'; it must still be rejected
        assert_eq!(symbol_to_index('Ł'), None);
        assert_eq!(symbol_to_index('é'), None);
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(index_to_symbol(32), None);
        assert_eq!(index_to_symbol(255), None);
    }
}
