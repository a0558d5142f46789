//! # Format Validator
//!
//! Decides whether a string conforms to the PAN grammar `AAAAA9999A`:
//! five letters, four digits, one letter.
//!
//! Input is normalized before any check: leading and trailing whitespace
//! is stripped and the remainder is uppercased. Padded or lowercase input
//! is therefore accepted when otherwise well-formed. Interior whitespace is
//! not removed and always fails the character-class check.

use crate::error::{CharClass, ValidationError};

/// The positional grammar, `A` for a letter and `9` for a digit.
pub const PAN_PATTERN: &str = "AAAAA9999A";

/// Exact length of a well-formed PAN.
pub const PAN_LENGTH: usize = 10;

const LAYOUT: [CharClass; PAN_LENGTH] = [
    CharClass::Letter,
    CharClass::Letter,
    CharClass::Letter,
    CharClass::Letter,
    CharClass::Letter,
    CharClass::Digit,
    CharClass::Digit,
    CharClass::Digit,
    CharClass::Digit,
    CharClass::Letter,
];

/// Trim surrounding whitespace and uppercase.
///
/// Shared by the validator, the decoder, and [`Pan`](crate::Pan) so every
/// entry point agrees on what "the candidate" is.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

/// The character class required at `position`, or `None` past the end of
/// the grammar.
pub fn expected_class(position: usize) -> Option<CharClass> {
    LAYOUT.get(position).copied()
}

/// Returns `true` iff `input`, once normalized, matches `AAAAA9999A`.
///
/// Never fails. Use [`validate_strict`] to learn why a candidate was
/// rejected.
pub fn is_well_formed(input: &str) -> bool {
    check(&normalize(input)).is_ok()
}

/// Validate `input`, reporting the first violated rule.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedLength`] if the normalized candidate
/// is not exactly [`PAN_LENGTH`] characters, otherwise
/// [`ValidationError::InvalidCharacterClass`] for the leftmost character
/// outside its required class.
pub fn validate_strict(input: &str) -> Result<(), ValidationError> {
    check(&normalize(input))
}

/// Check an already-normalized candidate.
pub(crate) fn check(candidate: &str) -> Result<(), ValidationError> {
    let length = candidate.chars().count();
    if length != PAN_LENGTH {
        return Err(ValidationError::MalformedLength {
            input: candidate.to_string(),
            length,
        });
    }

    for (position, (found, expected)) in candidate.chars().zip(LAYOUT).enumerate() {
        if !expected.matches(found) {
            return Err(ValidationError::InvalidCharacterClass {
                input: candidate.to_string(),
                position,
                found,
                expected,
            });
        }
    }

    Ok(())
}
