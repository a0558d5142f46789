//! # Error Types
//!
//! Strict validation is the only PAN operation in this crate that can fail.
//! Every failure carries the offending (normalized) candidate and enough
//! detail to render a message a user can act on directly. Parsing a
//! standalone holder-type code has its own small error enum.
//!
//! An unknown holder-type code is deliberately absent from this taxonomy:
//! it is a degraded decode outcome reported inside the
//! [`Report`](crate::Report), never an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Character class required at a PAN position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// ASCII letter `A`-`Z` (after uppercasing).
    Letter,
    /// ASCII digit `0`-`9`.
    Digit,
}

impl CharClass {
    /// Whether `c` belongs to this class.
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Digit => c.is_ascii_digit(),
        }
    }

    /// The pattern symbol for this class (`A` or `9`).
    pub fn symbol(self) -> char {
        match self {
            Self::Letter => 'A',
            Self::Digit => '9',
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Letter => f.write_str("a letter"),
            Self::Digit => f.write_str("a digit"),
        }
    }
}

/// A candidate rejected by [`validate_strict`](crate::validate_strict).
///
/// Only the first violated rule is reported. Length is checked before any
/// per-position rule, so a candidate that is both too short and contains a
/// bad character reports [`ValidationError::MalformedLength`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The normalized candidate is not exactly 10 characters long.
    #[error("PAN must be exactly 10 characters, got {length}")]
    MalformedLength {
        /// The normalized candidate.
        input: String,
        /// Its character count.
        length: usize,
    },

    /// A character does not belong to the class its position requires.
    #[error("character '{found}' at position {position} must be {expected}")]
    InvalidCharacterClass {
        /// The normalized candidate.
        input: String,
        /// Zero-based index of the first offending character.
        position: usize,
        /// The offending character.
        found: char,
        /// The class required at `position`.
        expected: CharClass,
    },
}

impl ValidationError {
    /// The normalized candidate that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::MalformedLength { input, .. } | Self::InvalidCharacterClass { input, .. } => {
                input
            }
        }
    }

    /// Zero-based position of the offending character, if the failure is
    /// positional.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::MalformedLength { .. } => None,
            Self::InvalidCharacterClass { position, .. } => Some(*position),
        }
    }
}

/// A holder-type code that could not be parsed with
/// [`HolderType::from_str`](crate::HolderType).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolderCodeError {
    /// The input is empty or longer than one character.
    #[error("holder type code must be one letter: {0:?}")]
    NotSingleLetter(String),

    /// A single character that is not in the holder-type table.
    #[error("unknown holder type code: {0:?}")]
    UnknownCode(char),
}
