//! # pancard-core — PAN Validation and Decoding
//!
//! Validates and decodes Indian Permanent Account Numbers (PAN), the
//! 10-character tax identifier with the positional grammar `AAAAA9999A`.
//!
//! ## Components
//!
//! 1. **Format validator** ([`validator`]). `is_well_formed()` answers yes/no
//!    and never fails. `validate_strict()` returns the first violated rule
//!    as a [`ValidationError`], length before character class.
//!
//! 2. **Holder-type table** ([`holder`]). The fourth character encodes the
//!    holder's status. One enum, ten codes, exhaustive `match` everywhere.
//!
//! 3. **Structure decoder** ([`decoder`]). `decode()` always returns a
//!    [`Report`], even for malformed input, so callers can see where a
//!    candidate diverges from the grammar. Missing fields carry a
//!    `present = false` flag instead of disappearing.
//!
//! 4. **`Pan` newtype** ([`identity`]). A validated-at-construction
//!    identifier for call sites that need a known-good value.
//!
//! ## Crate Policy
//!
//! - Pure functions only. No I/O, no global mutable state.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The check character is reported, never re-derived. There is no
//!   published checksum algorithm to verify it against.
//! - This crate checks format only. It does not confirm that a PAN was
//!   ever issued.

pub mod decoder;
pub mod error;
pub mod holder;
pub mod identity;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use decoder::{
    decode, summarize, CharacterInfo, CharacterKind, Component, Components, ExpectedClass, Report,
    Structure,
};
pub use error::{CharClass, HolderCodeError, ValidationError};
pub use holder::{HolderType, HolderTypeInfo, HOLDER_TYPE_COUNT};
pub use identity::Pan;
pub use validator::{is_well_formed, normalize, validate_strict, PAN_LENGTH, PAN_PATTERN};
