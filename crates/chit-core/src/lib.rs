//! # Chit Core Library
//!
//! `chit-core` generates and validates human-friendly coupon codes. Codes
//! are easy to read over the phone and safe to type: the alphabet avoids
//! characters people confuse, lowercase and stray separators are accepted
//! on input, and every four-symbol group carries a position-aware check
//! symbol so most typos are caught before a code ever reaches a backend.
//!
//! ## Features
//!
//! - **Code generation**: random codes in dashed (`XXXX-XXXX-XXXX`) or
//!   compact (`XXXXXXXX`) style, any number of groups
//! - **Validation**: normalizes what a person actually typed and returns
//!   the canonical form, or a precise reason for rejection
//! - **Error detection**: per-group checksums catch single-symbol typos
//!   and transposed groups
//! - **QR rendering**: terminal and SVG images for codes or redeem URLs
//! - **Configuration**: TOML config for style, part count and QR defaults
//!
//! ## Modules
//!
//! - [`alphabet`] - The 32-symbol code alphabet
//! - [`checksum`] - Per-group check symbol arithmetic
//! - [`code`] - Code generation and validation
//! - [`config`] - Configuration management
//! - [`qr`] - QR rendering for codes and redeem URLs
//!
//! ## Example
//!
//! ```
//! let code = chit_core::generate();
//! assert_eq!(code.parts(), 3);
//!
//! // validation forgives case and separators
//! let typed = code.as_str().to_lowercase().replace('-', " ");
//! let back = chit_core::validate(&typed).expect("still valid");
//! assert_eq!(back.as_str(), code.as_str());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]

pub mod alphabet;
pub mod checksum;
pub mod code;
pub mod config;
pub mod error;
pub mod qr;

pub use code::{generate, validate, Code, CodeStyle};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Symbols per group, including the trailing check symbol
pub const GROUP_LEN: usize = 4;

/// Data symbols per group
pub const DATA_LEN: usize = GROUP_LEN - 1;

/// Default part count for dashed codes
pub const DEFAULT_DASHED_PARTS: usize = 3;

/// Default part count for compact codes
pub const DEFAULT_COMPACT_PARTS: usize = 2;
