//! Error types for chit operations

use thiserror::Error;

/// Result type alias for chit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during chit operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input has the wrong number of symbols for the requested part count
    #[error("expected {expected} symbols for {parts} parts, got {actual}")]
    InvalidLength {
        /// Number of groups the code was checked against
        parts: usize,
        /// Symbol count a code of that many groups must have
        expected: usize,
        /// Symbol count actually present after separators were stripped
        actual: usize,
    },

    /// Input contains a character outside the code alphabet
    #[error("invalid symbol {0:?} in code")]
    InvalidSymbol(char),

    /// A group's trailing check symbol does not match its data symbols
    #[error("checksum mismatch in group {group}: expected {expected:?}, found {actual:?}")]
    InvalidChecksum {
        /// 1-based group position
        group: usize,
        /// Check symbol the data symbols call for
        expected: char,
        /// Check symbol actually present
        actual: char,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// QR code rendering error
    #[error("QR code error: {0}")]
    Qr(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error describes rejected code input rather than an
    /// operational failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. } | Self::InvalidSymbol(_) | Self::InvalidChecksum { .. }
        )
    }
}
