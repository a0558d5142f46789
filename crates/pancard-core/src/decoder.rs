//! # Structure Decoder
//!
//! Breaks a PAN candidate into its positional fields and annotates each one.
//!
//! ## Layout
//!
//! | Field | Positions | Meaning |
//! |-------|-----------|---------|
//! | series | 0–2 | Alphabetic series `AAA`–`ZZZ` |
//! | holder type code | 3 | Looked up in [`HolderType`](crate::HolderType) |
//! | surname initial | 4 | First letter of the holder's surname |
//! | sequence digits | 5–8 | Sequential number `0001`–`9999` |
//! | check character | 9 | Reported only, never verified |
//!
//! ## Graceful Degradation
//!
//! [`decode`] is a diagnostic aid, not a second validator. It never fails.
//! A field is `present` only when the normalized candidate covers its whole
//! range. Shorter candidates get the partial slice (possibly empty) with
//! `present = false`, so the [`Report`] has the same shape for every input.
//!
//! The report keeps the caller's input verbatim in `original_input`. All
//! matching and slicing runs on the normalized candidate.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::CharClass;
use crate::holder::HolderTypeInfo;
use crate::validator::{self, PAN_LENGTH, PAN_PATTERN};

/// Static description of one positional field.
struct FieldSpec {
    label: &'static str,
    range: Range<usize>,
    meaning: &'static str,
}

const SERIES: FieldSpec = FieldSpec {
    label: "Series",
    range: 0..3,
    meaning: "Alphabetic series running from AAA to ZZZ",
};

const HOLDER_CODE: FieldSpec = FieldSpec {
    label: "Holder type",
    range: 3..4,
    meaning: "Status of the PAN holder",
};

const SURNAME_INITIAL: FieldSpec = FieldSpec {
    label: "Surname initial",
    range: 4..5,
    meaning: "First letter of holder's name (surname)",
};

const SEQUENCE: FieldSpec = FieldSpec {
    label: "Sequence",
    range: 5..9,
    meaning: "Sequential number running from 0001 to 9999",
};

const CHECK: FieldSpec = FieldSpec {
    label: "Check character",
    range: 9..10,
    meaning: "Alphabetic check character (not independently verified)",
};

/// Full diagnostic decode of one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The caller's input, untouched.
    pub original_input: String,
    /// Same answer as [`is_well_formed`](crate::is_well_formed).
    pub is_valid: bool,
    /// Length and character-class counts.
    pub structure: Structure,
    /// Resolved holder type, or the `Unknown` marker.
    pub holder_type: HolderTypeInfo,
    /// One entry per positional field.
    pub components: Components,
    /// One display line per component, in positional order.
    pub breakdown: Vec<String>,
    /// One entry per character of the normalized candidate.
    pub characters: Vec<CharacterInfo>,
}

/// Structural metadata computed on the normalized candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Always [`PAN_PATTERN`].
    pub pattern: String,
    /// Character count (not bytes).
    pub total_length: usize,
    /// ASCII letters anywhere in the candidate.
    pub alphabets_count: usize,
    /// ASCII digits anywhere in the candidate.
    pub digits_count: usize,
    /// Layout rendering, e.g. `ABCPE (alphabets) + 1234 (digits) + K (alphabet)`.
    pub format: String,
}

/// The five positional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    pub series: Component,
    pub holder_type_code: Component,
    pub surname_initial: Component,
    pub sequence_digits: Component,
    pub check_character: Component,
}

impl Components {
    /// Fields in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        [
            &self.series,
            &self.holder_type_code,
            &self.surname_initial,
            &self.sequence_digits,
            &self.check_character,
        ]
        .into_iter()
    }
}

/// A single extracted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// The raw slice. Partial or empty when `present` is false.
    pub value: String,
    /// What the field means, with an absence note when not present.
    pub description: String,
    /// Whether the candidate covers the field's full range.
    pub present: bool,
}

/// Class of a character as found in the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    Alphabet,
    Digit,
    Other,
}

impl CharacterKind {
    fn of(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self::Alphabet
        } else if c.is_ascii_digit() {
            Self::Digit
        } else {
            Self::Other
        }
    }
}

/// Class the grammar requires at a position.
///
/// Positions past the tenth character are `Unexpected`: nothing may appear
/// there, so no character matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedClass {
    Alphabet,
    Digit,
    Unexpected,
}

impl ExpectedClass {
    /// The requirement at zero-based `position`.
    pub fn at(position: usize) -> Self {
        match validator::expected_class(position) {
            Some(CharClass::Letter) => Self::Alphabet,
            Some(CharClass::Digit) => Self::Digit,
            None => Self::Unexpected,
        }
    }

    /// Whether `c` satisfies this requirement.
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Alphabet => CharClass::Letter.matches(c),
            Self::Digit => CharClass::Digit.matches(c),
            Self::Unexpected => false,
        }
    }
}

impl std::fmt::Display for ExpectedClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alphabet => write!(f, "{}", CharClass::Letter),
            Self::Digit => write!(f, "{}", CharClass::Digit),
            Self::Unexpected => f.write_str("no character (beyond 10 characters)"),
        }
    }
}

/// Per-character breakdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterInfo {
    /// One-based position.
    pub position: usize,
    pub character: char,
    /// What was found.
    pub kind: CharacterKind,
    /// What the grammar requires here, `unexpected` past position 10.
    pub expected: ExpectedClass,
    /// Whether `kind` satisfies `expected`.
    pub matches: bool,
    pub purpose: String,
}

/// Decode `input` into a [`Report`]. Never fails.
pub fn decode(input: &str) -> Report {
    let candidate = validator::normalize(input);
    let chars: Vec<char> = candidate.chars().collect();
    let holder_type = HolderTypeInfo::resolve(chars.get(HOLDER_CODE.range.start).copied());

    let components = Components {
        series: extract(&chars, &SERIES, SERIES.meaning.to_string()),
        holder_type_code: extract(
            &chars,
            &HOLDER_CODE,
            format!("{}: {}", HOLDER_CODE.meaning, holder_type.type_name),
        ),
        surname_initial: extract(&chars, &SURNAME_INITIAL, SURNAME_INITIAL.meaning.to_string()),
        sequence_digits: extract(&chars, &SEQUENCE, SEQUENCE.meaning.to_string()),
        check_character: extract(&chars, &CHECK, CHECK.meaning.to_string()),
    };

    let breakdown = [&SERIES, &HOLDER_CODE, &SURNAME_INITIAL, &SEQUENCE, &CHECK]
        .into_iter()
        .zip(components.iter())
        .map(|(spec, component)| breakdown_line(spec, component))
        .collect();

    Report {
        original_input: input.to_string(),
        is_valid: validator::check(&candidate).is_ok(),
        structure: structure(&chars),
        characters: characters(&chars, &holder_type),
        holder_type,
        components,
        breakdown,
    }
}

/// One-sentence description of `input`. Never fails.
///
/// Malformed input yields a sentence naming the first structural defect,
/// using the same message as [`validate_strict`](crate::validate_strict).
pub fn summarize(input: &str) -> String {
    let candidate = validator::normalize(input);
    if let Err(e) = validator::check(&candidate) {
        return format!("Invalid PAN '{candidate}': {e}");
    }

    let report = decode(input);
    let c = &report.components;
    let holder = if report.holder_type.is_known() {
        format!(
            "for {} {}",
            article(&report.holder_type.type_name),
            report.holder_type.type_name
        )
    } else {
        format!(
            "with an unrecognised holder type '{}'",
            report.holder_type.code
        )
    };

    format!(
        "Valid PAN {candidate} {holder}, series {}, surname initial {}, sequence {}",
        c.series.value, c.surname_initial.value, c.sequence_digits.value
    )
}

fn extract(chars: &[char], spec: &FieldSpec, meaning: String) -> Component {
    let end = spec.range.end.min(chars.len());
    let start = spec.range.start.min(end);
    let value: String = chars[start..end].iter().collect();
    let present = chars.len() >= spec.range.end;

    let description = if present {
        meaning
    } else {
        format!(
            "{meaning} (absent: input has {} of {} characters)",
            chars.len(),
            spec.range.end
        )
    };

    Component {
        value,
        description,
        present,
    }
}

fn breakdown_line(spec: &FieldSpec, component: &Component) -> String {
    let positions = if spec.range.len() == 1 {
        format!("position {}", spec.range.end)
    } else {
        format!("positions {}-{}", spec.range.start + 1, spec.range.end)
    };

    match (component.present, component.value.is_empty()) {
        (true, _) => format!(
            "{} ({positions}): {} - {}",
            spec.label, component.value, component.description
        ),
        (false, true) => format!("{} ({positions}): absent", spec.label),
        (false, false) => format!(
            "{} ({positions}): absent, partial '{}'",
            spec.label, component.value
        ),
    }
}

fn structure(chars: &[char]) -> Structure {
    let slice = |r: Range<usize>| -> String {
        let end = r.end.min(chars.len());
        chars[r.start.min(end)..end].iter().collect()
    };

    let mut layout = format!(
        "{} (alphabets) + {} (digits) + {} (alphabet)",
        slice(0..5),
        slice(5..9),
        slice(9..PAN_LENGTH)
    );
    if chars.len() > PAN_LENGTH {
        layout.push_str(&format!(" + {} (extra)", slice(PAN_LENGTH..chars.len())));
    }

    Structure {
        pattern: PAN_PATTERN.to_string(),
        total_length: chars.len(),
        alphabets_count: chars.iter().filter(|c| c.is_ascii_alphabetic()).count(),
        digits_count: chars.iter().filter(|c| c.is_ascii_digit()).count(),
        format: layout,
    }
}

fn characters(chars: &[char], holder_type: &HolderTypeInfo) -> Vec<CharacterInfo> {
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let expected = ExpectedClass::at(i);
            let purpose = match i {
                0..=2 => "Part of alphabetic series (AAA-ZZZ)".to_string(),
                3 => format!("Holder status - {}", holder_type.type_name),
                4 => "First letter of surname/last name".to_string(),
                5..=8 => format!("Sequential number (digit {} of 4)", i - 4),
                9 => "Check character (not independently verified)".to_string(),
                _ => "Unexpected trailing character".to_string(),
            };
            CharacterInfo {
                position: i + 1,
                character: c,
                kind: CharacterKind::of(c),
                expected,
                matches: expected.matches(c),
                purpose,
            }
        })
        .collect()
}

fn article(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some('A' | 'E' | 'I' | 'O' | 'U') => "an",
        _ => "a",
    }
}
