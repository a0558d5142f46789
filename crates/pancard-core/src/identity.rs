//! # PAN Newtype
//!
//! [`Pan`] is a validated-at-construction identifier. Holding a `Pan` means
//! the value passed strict validation, so accessors can slice fixed
//! positions without re-checking.
//!
//! The stored form is normalized (trimmed, uppercase). Deserialization
//! routes through [`Pan::new`] so that malformed values are rejected at the
//! boundary instead of being silently accepted.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::holder::HolderType;
use crate::validator;

/// Indian Permanent Account Number.
///
/// # Validation
///
/// - Exactly 10 characters after trimming
/// - Positions 0-4 letters, 5-8 digits, 9 letter
/// - The holder-type code (position 3) is not restricted to the known table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Pan(String);

impl<'de> Deserialize<'de> for Pan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Pan {
    /// Create a PAN from a string, normalizing and validating it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found by
    /// [`validate_strict`](crate::validate_strict).
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let candidate = validator::normalize(value.as_ref());
        validator::check(&candidate)?;
        Ok(Self(candidate))
    }

    /// The normalized 10-character value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Positions 0-2.
    pub fn series(&self) -> &str {
        &self.0[0..3]
    }

    /// Position 3, the raw holder-type code.
    pub fn holder_type_code(&self) -> char {
        self.char_at(3)
    }

    /// Position 3 resolved against the table, `None` for unknown codes.
    pub fn holder_type(&self) -> Option<HolderType> {
        HolderType::from_code(self.holder_type_code())
    }

    /// Position 4.
    pub fn surname_initial(&self) -> char {
        self.char_at(4)
    }

    /// Positions 5-8 as a string, leading zeros kept.
    pub fn sequence(&self) -> &str {
        &self.0[5..9]
    }

    /// Position 9. Not verified against any checksum.
    pub fn check_character(&self) -> char {
        self.char_at(9)
    }

    // Validated values are pure ASCII, so byte and char indices coincide.
    fn char_at(&self, index: usize) -> char {
        char::from(self.0.as_bytes()[index])
    }
}

impl std::fmt::Display for Pan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Pan {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Pan {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
