//! Coupon code generation and validation
//!
//! A code is a run of four-symbol groups over the 32-symbol alphabet in
//! [`crate::alphabet`]; the last symbol of each group is a checksum of the
//! other three and the group's position (see [`crate::checksum`]). Two
//! presentation styles share those semantics:
//!
//! - **dashed**: groups joined with `-`, three parts by default
//!   (`XXXX-XXXX-XXXX`)
//! - **compact**: no separator, two parts by default (`XXXXXXXX`)
//!
//! Validation is forgiving about presentation. Lowercase input and any mix
//! of `-`, `/` and spaces are accepted; the canonical form that comes back
//! is uppercase with the style's own separator.
//!
//! ## Example
//!
//! ```
//! use chit_core::code::CodeStyle;
//!
//! let style = CodeStyle::dashed();
//! let code = style.generate();
//! assert!(style.validate(code.as_str()).is_some());
//!
//! let typed = style.validate("djq6/dpmd/db6t").expect("valid code");
//! assert_eq!(typed.as_str(), "DJQ6-DPMD-DB6T");
//! ```

use rand::Rng;

use crate::alphabet::{self, SYMBOLS};
use crate::checksum;
use crate::error::{Error, Result};

/// Separator characters accepted between groups on input
pub const INPUT_SEPARATORS: [char; 3] = ['-', '/', ' '];

/// Presentation policy for codes: how groups are joined, and how many of
/// them a code has when the caller does not say
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeStyle {
    separator: Option<char>,
    default_parts: usize,
}

impl CodeStyle {
    /// The dashed style: `XXXX-XXXX-XXXX`, three parts by default
    #[must_use]
    pub const fn dashed() -> Self {
        Self {
            separator: Some('-'),
            default_parts: crate::DEFAULT_DASHED_PARTS,
        }
    }

    /// The compact style: `XXXXXXXX`, two parts by default
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            separator: None,
            default_parts: crate::DEFAULT_COMPACT_PARTS,
        }
    }

    /// The same style with a different default part count
    #[must_use]
    pub const fn with_default_parts(self, parts: usize) -> Self {
        Self {
            separator: self.separator,
            default_parts: parts,
        }
    }

    /// Separator placed between groups in canonical form, if any
    #[must_use]
    pub const fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Part count used when none is given
    #[must_use]
    pub const fn default_parts(&self) -> usize {
        self.default_parts
    }

    /// Generate a code with the style's default part count
    #[must_use]
    pub fn generate(&self) -> Code {
        self.generate_parts(self.default_parts)
    }

    /// Generate a code with `parts` groups
    ///
    /// Each code is an independent draw; nothing tracks previously issued
    /// codes, so two calls can collide at a rate of one in `32^(3 * parts)`
    /// pairs. A `parts` of zero yields the empty code, which only validates
    /// against a part count of zero.
    #[must_use]
    pub fn generate_parts(&self, parts: usize) -> Code {
        self.generate_with(parts, &mut rand::thread_rng())
    }

    /// Generate a code from a caller-supplied randomness source
    ///
    /// Handing in the rng keeps generation deterministic under test; the
    /// other constructors draw from [`rand::thread_rng`].
    #[must_use]
    pub fn generate_with<R: Rng + ?Sized>(&self, parts: usize, rng: &mut R) -> Code {
        let mut indices = Vec::with_capacity(parts * crate::GROUP_LEN);
        for ordinal in 0..parts {
            let start = indices.len();
            for _ in 0..crate::DATA_LEN {
                let idx = rng.gen_range(0..SYMBOLS.len());
                indices.push(idx as u8);
            }
            indices.push(checksum::check_index(ordinal, &indices[start..]));
        }
        Code {
            text: self.render(&indices),
            parts,
            separator: self.separator,
        }
    }

    /// Validate `input` against the style's default part count
    ///
    /// Returns the code in canonical form, or `None` if the input cannot be
    /// a valid code of that many parts. The reason for a rejection is logged
    /// at debug level; use [`CodeStyle::parse`] to get it back as an error.
    #[must_use]
    pub fn validate(&self, input: &str) -> Option<Code> {
        self.validate_parts(input, self.default_parts)
    }

    /// Validate `input` as a code of `parts` groups
    #[must_use]
    pub fn validate_parts(&self, input: &str, parts: usize) -> Option<Code> {
        match self.parse(input, parts) {
            Ok(code) => Some(code),
            Err(err) => {
                tracing::debug!("rejected code input: {err}");
                None
            }
        }
    }

    /// Parse `input` as a code of `parts` groups, reporting why invalid
    /// input was rejected
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] when the symbol count (after
    /// separators are stripped) does not match `parts` groups,
    /// [`Error::InvalidSymbol`] for characters outside the alphabet, and
    /// [`Error::InvalidChecksum`] when a group fails verification.
    pub fn parse(&self, input: &str, parts: usize) -> Result<Code> {
        let indices = decode(input, parts)?;
        Ok(Code {
            text: self.render(&indices),
            parts,
            separator: self.separator,
        })
    }

    /// Render symbol indices as canonical text
    fn render(&self, indices: &[u8]) -> String {
        let mut text = String::with_capacity(indices.len() + indices.len() / crate::GROUP_LEN);
        for (i, group) in indices.chunks(crate::GROUP_LEN).enumerate() {
            if i > 0 {
                if let Some(sep) = self.separator {
                    text.push(sep);
                }
            }
            for &idx in group {
                text.push(char::from(SYMBOLS[usize::from(idx)]));
            }
        }
        text
    }
}

/// Normalize raw input and decode it to verified symbol indices
fn decode(input: &str, parts: usize) -> Result<Vec<u8>> {
    let expected = parts * crate::GROUP_LEN;

    // separators are formatting noise wherever they appear; every other
    // character counts toward the length gate
    let stripped: Vec<char> = input
        .chars()
        .filter(|c| !INPUT_SEPARATORS.contains(c))
        .collect();
    if stripped.len() != expected {
        return Err(Error::InvalidLength {
            parts,
            expected,
            actual: stripped.len(),
        });
    }

    let mut indices = Vec::with_capacity(expected);
    for c in stripped {
        let idx = alphabet::symbol_to_index(c).ok_or(Error::InvalidSymbol(c))?;
        indices.push(idx);
    }

    for (ordinal, group) in indices.chunks(crate::GROUP_LEN).enumerate() {
        let found = group[crate::DATA_LEN];
        let check = checksum::check_index(ordinal, &group[..crate::DATA_LEN]);
        if found != check {
            return Err(Error::InvalidChecksum {
                group: ordinal + 1,
                expected: char::from(SYMBOLS[usize::from(check)]),
                actual: char::from(SYMBOLS[usize::from(found)]),
            });
        }
    }

    Ok(indices)
}

/// A validated coupon code in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    text: String,
    parts: usize,
    separator: Option<char>,
}

impl Code {
    /// The canonical text: uppercase symbols, joined with the style's
    /// separator
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of groups in the code
    #[must_use]
    pub const fn parts(&self) -> usize {
        self.parts
    }

    /// Iterate over the code's four-symbol groups
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        let step = crate::GROUP_LEN + usize::from(self.separator.is_some());
        self.text
            .as_bytes()
            .chunks(step)
            .map(|chunk| std::str::from_utf8(&chunk[..crate::GROUP_LEN]).unwrap_or(""))
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.text
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Generate a dashed-style code with the default three parts
#[must_use]
pub fn generate() -> Code {
    CodeStyle::dashed().generate()
}

/// Validate `input` as a dashed-style code with the default three parts
#[must_use]
pub fn validate(input: &str) -> Option<Code> {
    CodeStyle::dashed().validate(input)
}
